//! UI Lexicon
//!
//! Fixed user-visible strings and DOM ids of the list view.

pub const TITLE: &str = "Ваш список";

pub const ARTICLE_LABEL: &str = "Артикул";
pub const QUANTITY_LABEL: &str = "Кількість";

pub const EMPTY_LIST: &str = "Ваш список порожній.";
pub const NO_DATA: &str = "Дані для списку не знайдено. Будь ласка, спробуйте відкрити знову з бота.";
pub const ERROR_PREFIX: &str = "Сталася помилка";

pub const CLOSE_BUTTON: &str = "Закрити";

/// Footer line, e.g. "Позицій: 3"
pub const ROW_COUNT_LABEL: &str = "Позицій";

pub const LIST_CONTAINER_ID: &str = "list-container";
pub const CLOSE_BUTTON_ID: &str = "close-button";
