use tera::{Context, Tera};
use vigie_core::models::intake::IntakeProfile;
use vigie_core::models::metrics::DerivedMetrics;
use vigie_core::models::risk::RiskFlags;

use crate::error::SummaryError;
use crate::view::SummaryView;

/// Name under which the built-in template is registered. The `.txt`
/// extension keeps Tera's HTML autoescaping off.
pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

/// Built-in summary layout (Jinja2 syntax). Variables are the fields of
/// [`SummaryView`].
pub const SUMMARY_TEMPLATE: &str = r#"=== PROFILE ===
Age: {{ age }} | Sex: {{ sex }}
Height/Weight: {{ height }} / {{ weight }} | BMI: {{ bmi }} ({{ bmi_category }})

=== TOBACCO ===
Status: {{ smoking_status }} | Pack-years: {{ pack_years }}
Quit date: {{ quit_date }} | Years since quitting: {{ years_since_quit }}
Alcohol: {{ alcohol }} | Physical activity: {{ physical_activity }}

=== CARDIOVASCULAR ===
Hypertension: {{ hypertension }} | Dyslipidemia: {{ cholesterol }} | Heart disease: {{ heart_disease }}
Risk factors ({{ cv_factors | length }}): {% if cv_factors %}{{ cv_factors | join(sep=", ") }}{% else %}none{% endif %}
Risk tier: {{ cv_tier }}

=== METABOLIC ===
Diabetes: {{ diabetes }}
Diabetes risk factors ({{ diabetes_risk_factors | length }}): {% if diabetes_risk_factors %}{{ diabetes_risk_factors | join(sep=", ") }}{% else %}none{% endif %}

=== FAMILY HISTORY ===
Maternal cancers: {% if maternal_cancer %}{{ maternal_cancer | join(sep="; ") }}{% else %}none reported{% endif %}
Paternal cancers: {% if paternal_cancer %}{{ paternal_cancer | join(sep="; ") }}{% else %}none reported{% endif %}
{% for line in family_tally %}- {{ line.site }}: {{ line.count }}
{% endfor %}Early onset (<50): {{ family_early_onset }} | Cardiovascular: {{ family_cardiovascular }} | Diabetes: {{ family_diabetes }}
{% if reproductive %}
=== REPRODUCTIVE HEALTH ===
Pregnancies: {{ reproductive.pregnancies }} | Menopause age: {{ reproductive.menopause_age }} | Early menopause: {{ reproductive.early_menopause }}
Hormone replacement therapy: {{ reproductive.hormonal_treatment }}
Hormonal contraception: {{ reproductive.contraception }} ({{ reproductive.contraception_years }})
{% endif %}
=== PRIOR SCREENINGS ===
{% for screening in screenings %}- {{ screening.name }}: {{ screening.date }}
{% else %}none reported
{% endfor %}
=== OCCUPATIONAL EXPOSURES ===
{% if occupational_exposure %}{{ occupational_exposure | join(sep=", ") }}{% else %}none reported{% endif %}
{% if indicators %}
=== KEY RISK INDICATORS ===
{% for indicator in indicators %}• {{ indicator }}
{% endfor %}{% endif %}"#;

/// Render the intake summary with the built-in template.
pub fn compose_summary(
    profile: &IntakeProfile,
    metrics: &DerivedMetrics,
    flags: &RiskFlags,
) -> Result<String, SummaryError> {
    compose_summary_with(SUMMARY_TEMPLATE, profile, metrics, flags)
}

/// Render the intake summary with a caller-supplied template.
///
/// The template sees the fields of [`SummaryView`] as context variables.
pub fn compose_summary_with(
    template_content: &str,
    profile: &IntakeProfile,
    metrics: &DerivedMetrics,
    flags: &RiskFlags,
) -> Result<String, SummaryError> {
    let view = SummaryView::new(profile, metrics, flags);
    let rendered = render_template(SUMMARY_TEMPLATE_NAME, template_content, &view)?;
    tracing::debug!(bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}

/// Render a Tera template with a summary view.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    view: &SummaryView,
) -> Result<String, SummaryError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| SummaryError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| SummaryError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
