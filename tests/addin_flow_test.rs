use meeting_cost::adapters::{ConsoleNotifier, FileMeetingSource, MeetingDocument};
use meeting_cost::core::format::format_currency;
use meeting_cost::{Advisory, AddinHandlers, CostEngine, SendDecision};
use std::io::Write;
use tempfile::NamedTempFile;

fn document(attendees: &[&str], start: &str, end: Option<&str>) -> MeetingDocument {
    MeetingDocument {
        organizer: "organizer@acme.com".to_string(),
        required_attendees: Some(attendees.iter().map(|a| a.to_string()).collect()),
        optional_attendees: Some(Vec::new()),
        start: Some(start.parse().unwrap()),
        end: end.map(|e| e.parse().unwrap()),
    }
}

fn six_person_meeting() -> MeetingDocument {
    document(
        &[
            "a@acme.com",
            "b@other.com",
            "c@acme.com",
            "d@acme.com",
            "e@acme.com",
            "f@acme.com",
        ],
        "2024-05-01T09:00:00Z",
        Some("2024-05-01T11:00:00Z"),
    )
}

#[tokio::test]
async fn test_six_participant_meeting_is_costed() {
    let engine = CostEngine::new(FileMeetingSource::new(six_person_meeting()));

    let estimate = engine.estimate().await.unwrap().unwrap();

    assert_eq!(estimate.result.total_internal_participants, 6);
    assert_eq!(estimate.result.duration_hours, 2.0);
    assert_eq!(estimate.result.total_cost, 120_000.0);
    assert_eq!(format_currency(estimate.result.total_cost), "120.000");
    assert!(estimate.applicable);
}

#[tokio::test]
async fn test_send_is_held_and_advisory_shown() {
    let handlers = AddinHandlers::new(
        FileMeetingSource::new(six_person_meeting()),
        ConsoleNotifier::new(),
    );

    assert!(matches!(
        handlers.on_send().await,
        SendDecision::BlockWithPrompt { .. }
    ));

    let advisory = handlers.on_item_changed().await.unwrap();
    assert_eq!(
        advisory,
        Advisory::Show {
            text: "Costo reunion: $120.000 (6 internos, 2 horas, $10.000/hr/persona)".to_string()
        }
    );
    assert!(handlers.notifier().current("costReunion").await.is_some());
}

#[tokio::test]
async fn test_small_meeting_is_allowed_silently() {
    let handlers = AddinHandlers::new(
        FileMeetingSource::new(document(
            &["a@acme.com", "b@acme.com", "x@other.com"],
            "2024-05-01T09:00:00Z",
            Some("2024-05-01T12:00:00Z"),
        )),
        ConsoleNotifier::new(),
    );

    assert_eq!(handlers.on_send().await, SendDecision::Allow);
    assert_eq!(handlers.on_item_changed().await.unwrap(), Advisory::Clear);
    assert!(handlers.notifier().current("costReunion").await.is_none());
}

#[tokio::test]
async fn test_missing_end_time_clears_and_allows() {
    let handlers = AddinHandlers::new(
        FileMeetingSource::new(document(&["a@acme.com"], "2024-05-01T09:00:00Z", None)),
        ConsoleNotifier::new(),
    );

    handlers.on_new_appointment().await.unwrap();
    assert!(handlers.notifier().current("costReunion").await.is_some());

    assert_eq!(handlers.on_item_changed().await.unwrap(), Advisory::Clear);
    assert!(handlers.notifier().current("costReunion").await.is_none());
    assert_eq!(handlers.on_send().await, SendDecision::Allow);

    assert!(handlers.on_calculate().await.unwrap().is_none());
    assert_eq!(
        handlers.notifier().current("costReunion").await.as_deref(),
        Some("No se pudo obtener la informacion de la reunion.")
    );
}

#[tokio::test]
async fn test_organizer_without_domain_allows_send() {
    let mut doc = six_person_meeting();
    doc.organizer = "organizer".to_string();
    let handlers = AddinHandlers::new(FileMeetingSource::new(doc), ConsoleNotifier::new());

    assert_eq!(handlers.on_send().await, SendDecision::Allow);
    assert_eq!(handlers.on_item_changed().await.unwrap(), Advisory::Clear);
}

#[tokio::test]
async fn test_meeting_file_from_disk() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(serde_json::to_string(&six_person_meeting()).unwrap().as_bytes())
        .unwrap();

    let source = FileMeetingSource::from_file(temp_file.path()).await.unwrap();
    let handlers = AddinHandlers::new(source, ConsoleNotifier::new());

    let estimate = handlers.on_calculate().await.unwrap().unwrap();
    assert!(estimate.applicable);
    assert_eq!(
        handlers.notifier().current("costReunion").await.as_deref(),
        Some("Costo reunion: $120.000 (6 internos, 2 horas, $10.000/hr/persona)")
    );
}
