//! List Renderer
//!
//! Fills the list container from a launch outcome. The container is passed
//! in explicitly so rendering can run without a DOM.

use crate::error::LaunchResult;
use crate::launch::LaunchData;
use crate::lexicon;
use crate::models::Item;

/// One visual row of the list
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub article: String,
    pub quantity: String,
}

impl ItemRow {
    pub fn from_item(item: &Item) -> Self {
        Self {
            article: item.article.to_string(),
            quantity: item.quantity.to_string(),
        }
    }

    /// "Артикул: <article>"
    pub fn article_text(&self) -> String {
        format!("{}: {}", lexicon::ARTICLE_LABEL, self.article)
    }

    /// "Кількість: <quantity>"
    pub fn quantity_text(&self) -> String {
        format!("{}: {}", lexicon::QUANTITY_LABEL, self.quantity)
    }
}

/// Message shown in place of rows
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// No launch parameter
    NoData,
    /// Valid payload without items
    Empty,
    /// Decode or parse failure, with the reason
    Failed(String),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::NoData => lexicon::NO_DATA.to_string(),
            Notice::Empty => lexicon::EMPTY_LIST.to_string(),
            Notice::Failed(reason) => format!("{}: {}", lexicon::ERROR_PREFIX, reason),
        }
    }
}

/// The designated list container
pub trait ListContainer {
    /// Drop all rows and any notice
    fn clear(&mut self);
    fn push_row(&mut self, row: ItemRow);
    fn show_notice(&mut self, notice: Notice);
}

/// In-memory container state, displayed by `ItemList`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListContent {
    rows: Vec<ItemRow>,
    notice: Option<Notice>,
}

impl ListContent {
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

impl ListContainer for ListContent {
    fn clear(&mut self) {
        self.rows.clear();
        self.notice = None;
    }

    fn push_row(&mut self, row: ItemRow) {
        self.rows.push(row);
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}

/// Replace the container's contents with the rendering of `outcome`
pub fn render_list<C: ListContainer + ?Sized>(container: &mut C, outcome: &LaunchResult<LaunchData>) {
    container.clear();

    match outcome {
        Ok(LaunchData::Missing) => container.show_notice(Notice::NoData),
        Ok(LaunchData::Items(items)) if items.is_empty() => container.show_notice(Notice::Empty),
        Ok(LaunchData::Items(items)) => {
            for item in items {
                container.push_row(ItemRow::from_item(item));
            }
        }
        Err(e) => container.show_notice(Notice::Failed(e.to_string())),
    }
}
