//! Text and JSON rendering of an analysis.

use queueing_core::{Analysis, Model, Problem};

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 10;

fn text_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        "{:<lw$} {:>vw$}\n",
        label,
        value,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    ));
}

fn float_row(out: &mut String, label: &str, value: f64, precision: usize) {
    text_row(out, label, &format!("{:.*}", precision, value));
}

/// Render the problem and its analysis as an aligned two-column table
pub fn render_table(model: Model, problem: &Problem, analysis: &Analysis, precision: usize) -> String {
    let mut out = String::new();

    text_row(&mut out, "Model", model.name());
    text_row(&mut out, "Servers", &problem.servers.to_string());
    float_row(&mut out, "Arrival rate", problem.arrival_rate, precision);
    float_row(&mut out, "Service rate", problem.service_rate, precision);
    float_row(&mut out, "Server utilisation", analysis.utilisation, precision);
    float_row(&mut out, "Queue length", analysis.queued, precision);
    float_row(&mut out, "Sojourn time", analysis.sojourn, precision);
    float_row(&mut out, "Probability of queueing", analysis.queue_probability, precision);
    float_row(&mut out, "Probability of loss", analysis.loss_probability, precision);

    out
}

/// Render the analysis as a single-line JSON object
pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string(analysis)
}
