//! Localized phrase catalogs for composed answers
//!
//! Every catalog has an entry for each supported locale.

use crate::models::IntentCategory;
use crate::types::Locale;

// ============================================================================
// Greetings
// ============================================================================

const GREETINGS_EN: &[&str] = &[
    "Hello! How can I help you with your water-related questions today?",
    "Hi there! I'm ready to provide you with the latest water level information. What can I help you with?",
    "Greetings! I'm here to assist with any questions about water levels and predictive insights. Ask away!",
    "Hey! Need some info on water levels or flood risks? I'm here to help.",
    "Welcome! I can provide data and insights on water levels for your area. What would you like to know?",
    "Hello! I'm Jal-Mitra, your groundwater guardian. Ready to analyze your local water situation?",
    "Hi there! I'm equipped with groundwater data and forecasting models. How can I assist you?",
    "Greetings! I specialize in water-level analysis and predictive insights for your region. What information do you need?",
    "Welcome to Jal-Mitra! I have access to water data and conservation strategies. How may I help?",
    "Hello! Ready to explore groundwater trends, forecasts, and conservation solutions for your area?",
];

const GREETINGS_HI: &[&str] = &[
    "नमस्ते! मैं जल-मित्र हूं, आपका भूजल संरक्षक। मैं आपकी स्थानीय जल स्थिति को समझने में मदद कर सकता हूं।",
    "नमस्कार! जल स्तर से जुड़े किसी भी सवाल में मैं आपकी मदद के लिए तैयार हूं।",
    "स्वागत है! मैं आपके क्षेत्र के भूजल के आंकड़े और सुझाव दे सकता हूं। आप क्या जानना चाहेंगे?",
    "नमस्ते! भूजल के रुझान, पूर्वानुमान और संरक्षण के उपाय जानने के लिए तैयार हैं?",
    "जल-मित्र में आपका स्वागत है! बताइए, मैं आपकी कैसे मदद करूं?",
];

pub fn greetings(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => GREETINGS_EN,
        Locale::Hi => GREETINGS_HI,
    }
}

// ============================================================================
// Lead-in Templates
// ============================================================================

const CONSERVATION_LEADS_EN: &[&str] = &[
    "Here are some effective water conservation strategies for your region:",
    "Let me share proven conservation techniques that work well in your area:",
    "Based on local conditions, here are my top conservation recommendations:",
    "For sustainable water management in your region, consider these approaches:",
];

const CONSERVATION_LEADS_HI: &[&str] = &[
    "आपके क्षेत्र के लिए जल संरक्षण की तकनीकें:",
    "आपके इलाके में कारगर संरक्षण के तरीके:",
    "स्थानीय परिस्थितियों के अनुसार मेरी मुख्य संरक्षण सलाह:",
];

const CROP_LEADS_EN: &[&str] = &[
    "For water-efficient farming in your area, I recommend:",
    "Smart crop selection for your region includes:",
    "To optimize water usage for agriculture, consider:",
    "Here are drought-resistant farming strategies for your location:",
];

const CROP_LEADS_HI: &[&str] = &[
    "आपके क्षेत्र में कम पानी वाली खेती के लिए मेरी सलाह:",
    "खेती में पानी के बेहतर उपयोग के लिए ध्यान दें:",
    "सूखा-रोधी खेती के उपाय:",
];

const STATUS_LEADS_EN: &[&str] = &[
    "Let me analyze your groundwater status based on the latest data:",
    "Here's what the current data tells us about your local groundwater:",
    "Based on regional monitoring, your groundwater situation shows:",
    "The latest groundwater assessment for your area indicates:",
];

const STATUS_LEADS_HI: &[&str] = &[
    "नवीनतम आंकड़ों के आधार पर आपकी भूजल स्थिति:",
    "क्षेत्रीय निगरानी के अनुसार आपके भूजल की स्थिति:",
    "आपके क्षेत्र का नवीनतम भूजल आकलन:",
];

const TREND_LEADS_EN: &[&str] = &[
    "Looking at long-term patterns, here's what I observe:",
    "The groundwater trends in your region show:",
    "Based on historical data analysis:",
    "Monitoring trends reveal the following patterns:",
];

const TREND_LEADS_HI: &[&str] = &[
    "दीर्घकालिक पैटर्न को देखते हुए:",
    "आपके क्षेत्र में भूजल के रुझान:",
    "ऐतिहासिक आंकड़ों के विश्लेषण के आधार पर:",
];

/// Lead-in catalog for categories that open with one
pub fn lead_ins(category: IntentCategory, locale: Locale) -> Option<&'static [&'static str]> {
    let catalog = match (category, locale) {
        (IntentCategory::Conservation, Locale::En) => CONSERVATION_LEADS_EN,
        (IntentCategory::Conservation, Locale::Hi) => CONSERVATION_LEADS_HI,
        (IntentCategory::Crops, Locale::En) => CROP_LEADS_EN,
        (IntentCategory::Crops, Locale::Hi) => CROP_LEADS_HI,
        (IntentCategory::Status, Locale::En) => STATUS_LEADS_EN,
        (IntentCategory::Status, Locale::Hi) => STATUS_LEADS_HI,
        (IntentCategory::Trend, Locale::En) => TREND_LEADS_EN,
        (IntentCategory::Trend, Locale::Hi) => TREND_LEADS_HI,
        _ => return None,
    };
    Some(catalog)
}

// ============================================================================
// Status Context Lines
// ============================================================================

const CRITICAL_CONTEXT_EN: &[&str] = &[
    "⚠️ The data indicates critical groundwater levels in your area. Immediate conservation measures are recommended.",
    "🚨 Critical groundwater status detected. Please prioritise emergency conservation in your household and fields.",
    "⛔ Your area shows critically low groundwater levels. Reduce pumping and start recharging wherever you can.",
];

const CRITICAL_CONTEXT_HI: &[&str] = &[
    "⚠️ आपके क्षेत्र में भूजल का स्तर गंभीर है। तुरंत संरक्षण उपाय की सलाह दी जाती है।",
    "🚨 गंभीर भूजल स्थिति। घर और खेत दोनों में पानी की बचत को प्राथमिकता दें।",
];

const GOOD_CONTEXT_EN: &[&str] = &[
    "✅ Great news! Your area shows healthy groundwater levels. Keep up the good practices to maintain this.",
    "🌊 Your groundwater situation looks good! Continued care will keep it that way.",
    "💚 Excellent groundwater health in your region. Sustainable use will help sustain it.",
];

const GOOD_CONTEXT_HI: &[&str] = &[
    "✅ अच्छी खबर! आपके क्षेत्र में भूजल स्तर स्वस्थ है। इसे बनाए रखने के लिए अच्छी आदतें जारी रखें।",
    "💚 आपके क्षेत्र में भूजल की स्थिति उत्कृष्ट है।",
];

/// Contextual lines for the extreme status bands
pub fn critical_context(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => CRITICAL_CONTEXT_EN,
        Locale::Hi => CRITICAL_CONTEXT_HI,
    }
}

pub fn good_context(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => GOOD_CONTEXT_EN,
        Locale::Hi => GOOD_CONTEXT_HI,
    }
}

// ============================================================================
// Category Content
// ============================================================================

pub fn conservation_tips(locale: Locale) -> &'static str {
    locale.pick(
        "1) Use drip irrigation for crops 2) Collect rainwater during monsoons 3) Plant drought-resistant crops 4) Check for leaks regularly 5) Use mulching to reduce evaporation.",
        "1) फसलों के लिए ड्रिप सिंचाई अपनाएं 2) मानसून में वर्षा जल संचय करें 3) सूखा-रोधी फसलें लगाएं 4) नियमित रूप से रिसाव जांचें 5) वाष्पीकरण कम करने के लिए मल्चिंग करें।",
    )
}

pub fn crop_advice(locale: Locale) -> &'static str {
    locale.pick(
        "Consider crop rotation with legumes, use organic matter to improve soil water retention, and plant during optimal seasons. Millets and pulses need far less water than paddy or sugarcane.",
        "दलहन के साथ फसल चक्र अपनाएं, मिट्टी में नमी बनाए रखने के लिए जैविक खाद डालें और सही मौसम में बुवाई करें। बाजरा और दालों को धान या गन्ने की तुलना में बहुत कम पानी चाहिए।",
    )
}

pub fn flood_risk_guidance(locale: Locale) -> &'static str {
    locale.pick(
        "Flood risk depends on rainfall, drainage and terrain as well as groundwater. Shallow water tables saturate quickly in heavy rain, so keep drains clear, avoid low-lying storage and follow local disaster management advisories.",
        "बाढ़ का खतरा वर्षा, जल निकासी और भू-भाग के साथ भूजल पर भी निर्भर करता है। उथला जल स्तर भारी बारिश में जल्दी भर जाता है, इसलिए नालियां साफ रखें, निचले स्थानों पर सामान न रखें और स्थानीय आपदा प्रबंधन की सलाह मानें।",
    )
}

pub fn data_sources(locale: Locale) -> &'static str {
    locale.pick(
        "My answers are based on: government water monitoring sensors and official databases; satellite imagery and remote sensing; community field measurements; meteorological data for rainfall and seasons; and long-term historical records for trend analysis. Readings come from the nearest monitoring point, so local conditions may differ.",
        "मेरे उत्तर इन पर आधारित हैं: सरकारी जल निगरानी सेंसर और आधिकारिक डेटाबेस; उपग्रह चित्र और रिमोट सेंसिंग; सामुदायिक माप; वर्षा और मौसम के आंकड़े; और रुझान विश्लेषण के लिए दीर्घकालिक ऐतिहासिक रिकॉर्ड। आंकड़े निकटतम निगरानी बिंदु से लिए जाते हैं, इसलिए स्थानीय स्थिति अलग हो सकती है।",
    )
}

pub fn location_prompt(locale: Locale) -> &'static str {
    locale.pick(
        "To provide accurate local insights, I need to know your location. Share your location or tell me your district or state, for example \"status in Pune\".",
        "सटीक स्थानीय जानकारी के लिए, कृपया अपना स्थान साझा करें या अपने ज़िले या राज्य का नाम बताएं, जैसे \"status in Pune\"।",
    )
}

pub fn fallback(locale: Locale) -> &'static str {
    locale.pick(
        "I can help with groundwater levels and status, long-term trends, flood risk, water conservation, water-efficient farming, and where my data comes from. Share your location or name a district or state to get started.",
        "मैं भूजल स्तर और स्थिति, दीर्घकालिक रुझान, बाढ़ का खतरा, जल संरक्षण, कम पानी वाली खेती और मेरे डेटा के स्रोतों के बारे में मदद कर सकता हूं। शुरू करने के लिए अपना स्थान साझा करें या किसी ज़िले या राज्य का नाम बताएं।",
    )
}

pub fn no_data(place: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "No groundwater data available for \"{}\". Please try a different city or state.",
            place
        ),
        Locale::Hi => format!(
            "\"{}\" के लिए भूजल डेटा उपलब्ध नहीं है। कृपया किसी अन्य शहर या राज्य का नाम आज़माएं।",
            place
        ),
    }
}

// ============================================================================
// Structured Answer Labels
// ============================================================================

/// Labels for the structured reading block
pub struct ReadingLabels {
    pub location: &'static str,
    pub water_level: &'static str,
    pub metres_below: &'static str,
    pub status: &'static str,
    pub health_score: &'static str,
    pub distance: &'static str,
    pub km_from_point: &'static str,
}

const READING_LABELS_EN: ReadingLabels = ReadingLabels {
    location: "Location",
    water_level: "Water level",
    metres_below: "m below surface",
    status: "Status",
    health_score: "Health score",
    distance: "Distance",
    km_from_point: "km from nearest data point",
};

const READING_LABELS_HI: ReadingLabels = ReadingLabels {
    location: "स्थान",
    water_level: "जल स्तर",
    metres_below: "मीटर सतह से नीचे",
    status: "स्थिति",
    health_score: "स्वास्थ्य स्कोर",
    distance: "दूरी",
    km_from_point: "किमी निकटतम डेटा बिंदु से",
};

pub fn reading_labels(locale: Locale) -> &'static ReadingLabels {
    match locale {
        Locale::En => &READING_LABELS_EN,
        Locale::Hi => &READING_LABELS_HI,
    }
}

pub fn trend_summary(from_year: &str, from: f64, to_year: &str, to: f64, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Estimated level went from {:.1} m in {} to {:.1} m in {} (synthetic series for charting).",
            from, from_year, to, to_year
        ),
        Locale::Hi => format!(
            "अनुमानित स्तर {} में {:.1} मीटर से {} में {:.1} मीटर रहा (चार्ट के लिए कृत्रिम श्रृंखला)।",
            from_year, from, to_year, to
        ),
    }
}
