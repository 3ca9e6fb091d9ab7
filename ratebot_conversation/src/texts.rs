//! Literal strings and reserved payloads of the bot.

/// Free-text keyword and menu payload that opens the currency list
pub const RATE_KEYWORD: &str = "rate";

/// Payload of the "Get Started" button on the welcome screen
pub const GET_STARTED_PAYLOAD: &str = "GetStarted";

/// Quick-reply payload that advances to the next page
pub const MORE_PAYLOAD: &str = "Next";

pub const MORE_TITLE: &str = "Xem tiếp";

pub const MENU_PROMPT: &str =
    "GoBot cung cấp chức năng xem tỉ giá giữa các ngoại tệ và đồng Việt Nam.\nMời bạn chọn ngoại tệ:";

pub const NOT_FOUND: &str = "Không có thông tin về ngoại tệ này";

pub const APOLOGY: &str = "Có lỗi trong quá trình xử lý. Bạn vui lòng thử lại sau bằng cách gửi 'rate' cho tôi nhé. Cảm ơn!";

pub const GREETING: &str = "ChatbotByLeo - Ứng dụng cung cấp thông tin tỉ giá hối đoái";

/// Title of the persistent menu entry that sends [`RATE_KEYWORD`]
pub const MENU_RATE_TITLE: &str = "Tỉ giá hối đoái";
