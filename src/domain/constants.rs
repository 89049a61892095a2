pub const ODD_QUESTIONS: [&str; 11] = [
    "1. Does this image have poor visibility (e.g., heavy rain, snow, fog)?",
    "2. Is the camera obstructed (e.g., by mud, ice, snow)?",
    "3. Is the road in this image a sharp curve?",
    "4. Is the road in this image an on-off ramp?",
    "5. Is the road in this image an intersection?",
    "6. Does the road in this image have restricted lanes?",
    "7. Does the road in this image have construction zones?",
    "8. Is the road in this image highly banked?",
    "9. Is the image affected by bright light (e.g., headlights, sunlight)?",
    "10. Is the road in this image narrow or winding?",
    "11. Is the road in this image on a hill?",
];

pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const DEFAULT_IMAGES_DIR: &str = "images";

pub const DEFAULT_REPORT_PATH: &str = "compliance_report.json";

pub const REPORT_VERSION: u32 = 1;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_COMPLETION_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 300;
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_VISION_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_VISION_MODEL: &str = "minigpt-4";
pub const DEFAULT_VISION_MAX_TOKENS: u32 = 16;
pub const DEFAULT_VISION_TEMPERATURE: f32 = 0.0;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
