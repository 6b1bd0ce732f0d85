use httpmock::prelude::*;
use meeting_cost::adapters::{GraphCalendarClient, StaticTokenProvider};
use meeting_cost::core::CalendarEvents;
use meeting_cost::{CostError, PanelContext, PanelController, PanelView};

fn events_body(internal: usize) -> serde_json::Value {
    let mut attendees: Vec<_> = (0..internal)
        .map(|i| {
            serde_json::json!({
                "type": "required",
                "emailAddress": {"address": format!("p{}@acme.com", i)}
            })
        })
        .collect();
    attendees.push(serde_json::json!({
        "type": "optional",
        "emailAddress": {"address": "guest@partner.org"}
    }));

    serde_json::json!({
        "value": [
            {
                "subject": "Quarterly planning",
                "start": {"dateTime": "2024-05-01T14:00:00.0000000", "timeZone": "UTC"},
                "end": {"dateTime": "2024-05-01T15:30:00.0000000", "timeZone": "UTC"},
                "attendees": attendees,
                "organizer": {"emailAddress": {"address": "boss@acme.com"}}
            },
            {
                "subject": "Older meeting",
                "start": {"dateTime": "2024-04-01T14:00:00.0000000"},
                "end": {"dateTime": "2024-04-01T15:00:00.0000000"},
                "attendees": [],
                "organizer": {"emailAddress": {"address": "boss@acme.com"}}
            }
        ]
    })
}

#[tokio::test]
async fn test_panel_renders_first_event() {
    let server = MockServer::start_async().await;
    let events_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1.0/me/calendar/events")
                .header("Authorization", "Bearer test-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(events_body(5));
        })
        .await;

    let controller = PanelController::new(
        StaticTokenProvider::new("test-token"),
        GraphCalendarClient::new(server.url("/v1.0")),
    );

    let view = controller
        .load(&PanelContext {
            meeting_id: Some("meeting-123".to_string()),
        })
        .await;

    events_mock.assert_async().await;
    assert_eq!(
        view,
        PanelView::Result {
            total_cost: "$90.000".to_string(),
            details: "6 internos \u{00b7} 1 hora 30 min \u{00b7} $10.000/hr/persona".to_string(),
        }
    );
}

#[tokio::test]
async fn test_upcoming_lookup_without_meeting_id() {
    let server = MockServer::start_async().await;
    let events_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/me/calendar/events")
                .query_param("$top", "10")
                .query_param("$orderby", "start/dateTime")
                .query_param_exists("$filter");
            then.status(200).json_body(events_body(1));
        })
        .await;

    let controller = PanelController::new(
        StaticTokenProvider::new("test-token"),
        GraphCalendarClient::new(server.base_url()),
    );

    let view = controller.load(&PanelContext::default()).await;

    events_mock.assert_async().await;
    assert_eq!(view, PanelView::NotApplicable);
}

#[tokio::test]
async fn test_api_failure_renders_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me/calendar/events");
            then.status(401).body("InvalidAuthenticationToken");
        })
        .await;

    let client = GraphCalendarClient::new(server.base_url());

    let err = client
        .find_meeting_event("expired", None)
        .await
        .unwrap_err();
    match err {
        CostError::ApiStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "InvalidAuthenticationToken");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let controller = PanelController::new(StaticTokenProvider::new("expired"), client);
    assert_eq!(
        controller.load(&PanelContext::default()).await,
        PanelView::Error
    );
}

#[tokio::test]
async fn test_empty_event_list_renders_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/me/calendar/events");
            then.status(200).json_body(serde_json::json!({"value": []}));
        })
        .await;

    let controller = PanelController::new(
        StaticTokenProvider::new("test-token"),
        GraphCalendarClient::new(server.base_url()),
    );

    assert_eq!(
        controller.load(&PanelContext::default()).await,
        PanelView::Error
    );
}
