use alloc::string::String;
use alloc::vec::Vec;

/// One logical content entry, before duplication for looping.
///
/// Items are supplied once at construction and never mutated; identity is
/// [`Item::id`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image reference (path or URL); opaque to the engine.
    pub image: String,
    pub long_description: String,
    pub tags: Vec<String>,
}

impl Item {
    /// Creates an item with the remaining fields empty.
    ///
    /// Useful together with struct-update syntax:
    /// `Item { tags: vec![...], ..Item::new("id", "Title") }`.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A card in the doubled display sequence, positioned for rendering.
#[derive(Clone, Copy, Debug)]
pub struct DisplayCard<'a> {
    /// Slot in the doubled sequence (`0..2 * count`).
    pub slot: usize,
    /// Logical item index (`slot % count`).
    pub index: usize,
    /// Leading-edge position in pixels (`offset + slot * step`).
    pub x: f64,
    pub item: &'a Item,
}
