use crate::core::format::{format_currency, format_duration};
use crate::core::{CostPolicy, CostResult};

pub const ACTIVATION_NOTICE: &str =
    "Calculadora de costo activa. Agregue asistentes y presione Enviar para ver el costo.";
pub const UNAVAILABLE_NOTICE: &str = "No se pudo obtener la informacion de la reunion.";

fn money(policy: &CostPolicy, amount: f64) -> String {
    format!("{}{}", policy.currency_symbol, format_currency(amount))
}

pub fn send_prompt(result: &CostResult, policy: &CostPolicy) -> String {
    format!(
        "Costo estimado de esta reunion: {}\n\nParticipantes internos: {}\nDuracion: {}\nTarifa por persona por hora: {}\n\nDesea enviar la invitacion de todas formas?",
        money(policy, result.total_cost),
        result.total_internal_participants,
        format_duration(result.duration_hours),
        money(policy, policy.cost_per_hour_per_person),
    )
}

pub fn advisory_text(result: &CostResult, policy: &CostPolicy) -> String {
    format!(
        "Costo reunion: {} ({} internos, {}, {}/hr/persona)",
        money(policy, result.total_cost),
        result.total_internal_participants,
        format_duration(result.duration_hours),
        money(policy, policy.cost_per_hour_per_person),
    )
}

pub fn below_threshold_notice(result: &CostResult, policy: &CostPolicy) -> String {
    format!(
        "Esta reunion tiene {} participantes internos. El calculo se activa con {} o mas.",
        result.total_internal_participants, policy.min_internal_participants
    )
}

pub fn panel_total(result: &CostResult, policy: &CostPolicy) -> String {
    money(policy, result.total_cost)
}

pub fn panel_details(result: &CostResult, policy: &CostPolicy) -> String {
    format!(
        "{} internos \u{00b7} {} \u{00b7} {}/hr/persona",
        result.total_internal_participants,
        format_duration(result.duration_hours),
        money(policy, policy.cost_per_hour_per_person),
    )
}
