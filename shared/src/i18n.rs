//! Translation table for the strings the decision pipeline emits
//!
//! The pipeline never hard-codes presentation text: every message is
//! addressed by key and resolved against the active locale here. Templates
//! carry `{name}` placeholders that [`render`] substitutes.

use crate::types::Locale;

/// Keys for every localizable message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    // Alerts
    PestOutbreak,
    MoistureOptimal,
    SnakeDetected,
    EagleSpotted,
    DroughtRisk,
    CropHealthDeclining,
    LowSoilMoisture,
    // Recommendation clauses
    IrrigateTomorrow,
    StopWatering,
    ApplyFertilizer,
    ReducePesticide,
    IncreaseIrrigation,
    // Spray timeline
    SprayScheduled,
    SprayPostponed,
    // Prediction status
    HealthGood,
    HealthWarning,
    // Chart series
    RainfallSeries,
    WateringSeries,
    SoilSeries,
    SoilMoistureLabel,
    SoilPhLabel,
    SoilNitrogenLabel,
    DayLabel,
}

/// Look up the message template for a key in the given locale.
pub fn text(key: MessageKey, locale: Locale) -> &'static str {
    use Locale::{En, Sw};
    use MessageKey::*;

    match (key, locale) {
        (PestOutbreak, En) => "Pest outbreak likely in 3 days.",
        (PestOutbreak, Sw) => "Uwezekano wa mlipuko wa wadudu ndani ya siku 3.",

        (MoistureOptimal, En) => "Moisture levels optimal.",
        (MoistureOptimal, Sw) => "Viwango vya unyevu ni bora.",

        (SnakeDetected, En) => "Drone detected potential snake near field edge.",
        (SnakeDetected, Sw) => "Droni imegundua nyoka karibu na ukingo wa shamba.",

        (EagleSpotted, En) => "Eagle spotted above farm - possible threat.",
        (EagleSpotted, Sw) => "Tai ameonekana juu ya shamba - hatari inayowezekana.",

        (DroughtRisk, En) => "Drought risk detected - low rainfall.",
        (DroughtRisk, Sw) => "Hatari ya ukame imegunduliwa - mvua kidogo.",

        (CropHealthDeclining, En) => "Crop health declining - check soil.",
        (CropHealthDeclining, Sw) => "Afya ya mazao inashuka - kagua udongo.",

        (LowSoilMoisture, En) => {
            "Low soil moisture detected ({moisture}%). Suggestion: Increase irrigation by 15 mm."
        }
        (LowSoilMoisture, Sw) => {
            "Unyevu mdogo wa udongo umegunduliwa ({moisture}%). Pendekezo: Ongeza umwagiliaji kwa mm 15."
        }

        (IrrigateTomorrow, En) => "Irrigate 10 mm tomorrow morning.",
        (IrrigateTomorrow, Sw) => "Mwagilia mm 10 kesho asubuhi.",

        (StopWatering, En) => "Stop watering - sufficient rain detected.",
        (StopWatering, Sw) => "Acha kumwagilia - mvua ya kutosha imegunduliwa.",

        (ApplyFertilizer, En) => "Apply 5 kg/ha fertilizer to boost health.",
        (ApplyFertilizer, Sw) => "Weka mbolea kilo 5 kwa hekta ili kuboresha afya.",

        (ReducePesticide, En) => "Reduce pesticide use due to heavy rain.",
        (ReducePesticide, Sw) => "Punguza matumizi ya dawa kutokana na mvua kubwa.",

        (IncreaseIrrigation, En) => "Increase irrigation by 15 mm due to low soil moisture.",
        (IncreaseIrrigation, Sw) => {
            "Ongeza umwagiliaji kwa mm 15 kutokana na unyevu mdogo wa udongo."
        }

        (SprayScheduled, En) => "{date}: Scheduled spray at 6 PM",
        (SprayScheduled, Sw) => "{date}: Kunyunyizia kumepangwa saa 12 jioni",

        (SprayPostponed, En) => "{date}: Spray postponed due to rain ({rain} mm)",
        (SprayPostponed, Sw) => "{date}: Kunyunyizia kumeahirishwa kwa sababu ya mvua (mm {rain})",

        (HealthGood, En) => "Good",
        (HealthGood, Sw) => "Nzuri",

        (HealthWarning, En) => "Warning - Action Needed",
        (HealthWarning, Sw) => "Onyo - Hatua Inahitajika",

        (RainfallSeries, En) => "Rainfall (mm)",
        (RainfallSeries, Sw) => "Mvua (mm)",

        (WateringSeries, En) => "Watering Volume (mm)",
        (WateringSeries, Sw) => "Kiasi cha Kumwagilia (mm)",

        (SoilSeries, En) => "Soil Metrics",
        (SoilSeries, Sw) => "Vipimo vya Udongo",

        (SoilMoistureLabel, En) => "Moisture (%)",
        (SoilMoistureLabel, Sw) => "Unyevu (%)",

        (SoilPhLabel, En) => "pH",
        (SoilPhLabel, Sw) => "pH",

        (SoilNitrogenLabel, En) => "Nitrogen (mg/kg)",
        (SoilNitrogenLabel, Sw) => "Naitrojeni (mg/kg)",

        (DayLabel, En) => "Day {n}",
        (DayLabel, Sw) => "Siku {n}",
    }
}

/// Resolve a template and substitute `{name}` placeholders.
pub fn render(key: MessageKey, locale: Locale, args: &[(&str, String)]) -> String {
    let mut message = text(key, locale).to_string();
    for (name, value) in args {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}
