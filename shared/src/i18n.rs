//! Static display strings for every supported locale.

use crate::prefs::Locale;

pub struct AppStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub data_source: &'static str,
    pub upload_custom: &'static str,
    pub sample_data: &'static str,
    pub load_sample: &'static str,
    pub input_images: &'static str,
    pub generate_pred: &'static str,
    pub processing: &'static str,
    pub powered_by: &'static str,
    pub designed: &'static str,
    pub diffusion_models: &'static str,
    pub hindi: &'static str,
    pub english: &'static str,
    pub gov_india: &'static str,
    pub gov_india_hi: &'static str,
    pub home_nav: &'static str,
}

pub struct LandingStrings {
    pub team_name: &'static str,
    pub hackathon_title: &'static str,
    pub launch_app: &'static str,
    pub project_title: &'static str,
    pub project_description: &'static str,
    pub about_title: &'static str,
    pub team_title: &'static str,
    pub team_description: &'static str,
    pub team_members: &'static str,
    pub team_lead: &'static str,
    pub developer: &'static str,
    pub researcher: &'static str,
    pub analyst: &'static str,
}

const APP_EN: AppStrings = AppStrings {
    title: "Cloud Motion Prediction System",
    subtitle: "Advanced Satellite Image Analysis Platform",
    data_source: "Data Source Selection",
    upload_custom: "Upload Custom Images",
    sample_data: "Use Sample INSAT Data",
    load_sample: "Load Sample Data",
    input_images: "Input Images",
    generate_pred: "Generate Predictions",
    processing: "Processing...",
    powered_by: "Powered by Indigenous INSAT Satellite Data & Advanced Diffusion Models",
    designed: "Designed for operational integration with IMD & NESAC platforms",
    diffusion_models: "AI Powered",
    hindi: "हिंदी",
    english: "English",
    gov_india: "Government of India",
    gov_india_hi: "भारत सरकार",
    home_nav: "Home",
};

const APP_HI: AppStrings = AppStrings {
    title: "क्लाउड मोशन पूर्वानुमान प्रणाली",
    subtitle: "उन्नत उपग्रह छवि विश्लेषण प्लेटफॉर्म",
    data_source: "डेटा स्रोत चयन",
    upload_custom: "कस्टम छवियां अपलोड करें",
    sample_data: "नमूना इनसैट डेटा का उपयोग करें",
    load_sample: "नमूना डेटा लोड करें",
    input_images: "इनपुट छवियां",
    generate_pred: "पूर्वानुमान उत्पन्न करें",
    processing: "प्रसंस्करण...",
    powered_by: "स्वदेशी इनसैट उपग्रह डेटा और उन्नत डिफ्यूजन मॉडल द्वारा संचालित",
    designed: "आईएमडी और नेसैक प्लेटफॉर्म के साथ परिचालन एकीकरण के लिए डिज़ाइन किया गया",
    diffusion_models: "एआई संचालित",
    hindi: "हिंदी",
    english: "English",
    gov_india: "Government of India",
    gov_india_hi: "भारत सरकार",
    home_nav: "होम",
};

const LANDING_EN: LandingStrings = LandingStrings {
    team_name: "Team CloudVision",
    hackathon_title: "Bharatiya Antariksh Hackathon 2025",
    launch_app: "Launch Application",
    project_title: "Chase the Cloud: Leveraging Diffusion Models for Cloud Motion Prediction using INSAT-3DR/3DS Imagery",
    project_description: "This project focuses on predicting cloud motion using diffusion models, a class of deep generative networks, applied to satellite imagery from INSAT-3DR/3DS. Traditional optical flow or physics-based models often falter when confronted with volatile weather dynamics. In contrast, this approach uses spatio-temporal learning to simulate realistic cloud evolution from multi-spectral past frames, delivering enhanced forecasting for short-term (0–3 hours) applications including nowcasting and early warnings for severe weather events.",
    about_title: "About Our Project",
    team_title: "Our Team",
    team_description: "We are a dedicated team of researchers and developers working on advancing geospatial prediction technology for better weather forecasting and climate analysis.",
    team_members: "Team Members",
    team_lead: "Team Lead",
    developer: "Developer",
    researcher: "Researcher",
    analyst: "Data Analyst",
};

const LANDING_HI: LandingStrings = LandingStrings {
    team_name: "टीम क्लाउडविज़न",
    hackathon_title: "भारतीय अंतरिक्ष हैकाथॉन 2025",
    launch_app: "एप्लिकेशन लॉन्च करें",
    project_title: "चेज़ द क्लाउड: इनसैट-3डीआर/3डीएस इमेजरी का उपयोग करके क्लाउड मोशन पूर्वानुमान के लिए डिफ्यूजन मॉडल का लाभ उठाना",
    project_description: "यह परियोजना इनसैट-3डीआर/3डीएस से उपग्रह छवियों पर लागू डिफ्यूजन मॉडल, एक प्रकार के गहरे जेनेरेटिव नेटवर्क का उपयोग करके क्लाउड मोशन की भविष्यवाणी करने पर केंद्रित है। पारंपरिक ऑप्टिकल फ्लो या भौतिकी-आधारित मॉडल अक्सर अस्थिर मौसम गतिशीलता के सामने असफल हो जाते हैं। इसके विपरीत, यह दृष्टिकोण बहु-स्पेक्ट्रल पिछले फ्रेम से वास्तविक क्लाउड विकास का अनुकरण करने के लिए स्थानिक-अस्थायी शिक्षा का उपयोग करता है, नाउकास्टिंग और गंभीर मौसम घटनाओं के लिए प्रारंभिक चेतावनी सहित अल्पकालिक (0-3 घंटे) अनुप्रयोगों के लिए बेहतर पूर्वानुमान प्रदान करता है।",
    about_title: "हमारी परियोजना के बारे में",
    team_title: "हमारी टीम",
    team_description: "हम बेहतर मौसम पूर्वानुमान और जलवायु विश्लेषण के लिए भूस्थानिक पूर्वानुमान तकनीक को आगे बढ़ाने पर काम करने वाले शोधकर्ताओं और डेवलपर्स की एक समर्पित टीम हैं।",
    team_members: "टीम के सदस्य",
    team_lead: "टीम लीड",
    developer: "डेवलपर",
    researcher: "शोधकर्ता",
    analyst: "डेटा विश्लेषक",
};

impl Locale {
    pub fn app(self) -> &'static AppStrings {
        match self {
            Locale::En => &APP_EN,
            Locale::Hi => &APP_HI,
        }
    }

    pub fn landing(self) -> &'static LandingStrings {
        match self {
            Locale::En => &LANDING_EN,
            Locale::Hi => &LANDING_HI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast shown on the forecast page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Things worth telling the user about, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    InvalidCount { min: usize, max: usize },
    BatchAccepted { count: usize },
    SampleLoaded,
    NoImages { min: usize, max: usize },
    AlreadyProcessing,
    PredictionsReady,
    PredictionFailed,
}

impl NoticeEvent {
    pub fn kind(&self) -> NoticeKind {
        match self {
            NoticeEvent::BatchAccepted { .. }
            | NoticeEvent::SampleLoaded
            | NoticeEvent::PredictionsReady => NoticeKind::Success,
            _ => NoticeKind::Error,
        }
    }

    pub fn render(&self, locale: Locale) -> Notice {
        let (title, body) = match (locale, *self) {
            (Locale::En, NoticeEvent::InvalidCount { min, max }) => (
                "Invalid number of images".to_string(),
                format!("Please upload {min}-{max} images for optimal prediction accuracy."),
            ),
            (Locale::Hi, NoticeEvent::InvalidCount { min, max }) => (
                "छवियों की अमान्य संख्या".to_string(),
                format!("इष्टतम पूर्वानुमान सटीकता के लिए कृपया {min}-{max} छवियां अपलोड करें।"),
            ),
            (Locale::En, NoticeEvent::BatchAccepted { count }) => (
                "Images uploaded successfully".to_string(),
                format!("{count} geospatial images ready for processing."),
            ),
            (Locale::Hi, NoticeEvent::BatchAccepted { count }) => (
                "छवियां सफलतापूर्वक अपलोड की गईं".to_string(),
                format!("{count} भूस्थानिक छवियां प्रसंस्करण के लिए तैयार हैं।"),
            ),
            (Locale::En, NoticeEvent::SampleLoaded) => (
                "Sample INSAT data loaded".to_string(),
                "Indigenous satellite imagery ready for analysis.".to_string(),
            ),
            (Locale::Hi, NoticeEvent::SampleLoaded) => (
                "नमूना इनसैट डेटा लोड किया गया".to_string(),
                "विश्लेषण के लिए स्वदेशी उपग्रह छवियां तैयार हैं।".to_string(),
            ),
            (Locale::En, NoticeEvent::NoImages { min, max }) => (
                "No images to process".to_string(),
                format!("Please upload {min}-{max} images first."),
            ),
            (Locale::Hi, NoticeEvent::NoImages { min, max }) => (
                "प्रसंस्करण के लिए कोई छवि नहीं".to_string(),
                format!("कृपया पहले {min}-{max} छवियां अपलोड करें।"),
            ),
            (Locale::En, NoticeEvent::AlreadyProcessing) => (
                "Processing in progress".to_string(),
                "Please wait for the current prediction run to finish.".to_string(),
            ),
            (Locale::Hi, NoticeEvent::AlreadyProcessing) => (
                "प्रसंस्करण जारी है".to_string(),
                "कृपया वर्तमान पूर्वानुमान पूरा होने की प्रतीक्षा करें।".to_string(),
            ),
            (Locale::En, NoticeEvent::PredictionsReady) => (
                "Predictions generated successfully".to_string(),
                "Diffusion model analysis complete with high accuracy metrics.".to_string(),
            ),
            (Locale::Hi, NoticeEvent::PredictionsReady) => (
                "पूर्वानुमान सफलतापूर्वक उत्पन्न किए गए".to_string(),
                "उच्च सटीकता मेट्रिक्स के साथ डिफ्यूजन मॉडल विश्लेषण पूर्ण।".to_string(),
            ),
            (Locale::En, NoticeEvent::PredictionFailed) => (
                "Prediction failed".to_string(),
                "The forecasting service could not produce frames. Please try again.".to_string(),
            ),
            (Locale::Hi, NoticeEvent::PredictionFailed) => (
                "पूर्वानुमान विफल".to_string(),
                "पूर्वानुमान सेवा फ्रेम नहीं बना सकी। कृपया पुनः प्रयास करें।".to_string(),
            ),
        };

        Notice { kind: self.kind(), title, body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Lead,
    Developer,
    Researcher,
    Analyst,
}

impl TeamRole {
    pub fn label(self, strings: &LandingStrings) -> &'static str {
        match self {
            TeamRole::Lead => strings.team_lead,
            TeamRole::Developer => strings.developer,
            TeamRole::Researcher => strings.researcher,
            TeamRole::Analyst => strings.analyst,
        }
    }
}

pub const TEAM: [(&str, TeamRole); 4] = [
    ("Rajesh Kumar", TeamRole::Lead),
    ("Priya Sharma", TeamRole::Developer),
    ("Amit Singh", TeamRole::Researcher),
    ("Sneha Patel", TeamRole::Analyst),
];

/// First letter of each word, e.g. "Priya Sharma" -> "PS".
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}
