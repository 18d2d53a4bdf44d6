use serde::{Deserialize, Serialize};

/// Category tag for a structured briefing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BriefingItemType {
    Airbase,
    FlightGroup,
    Jtac,
    Waypoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingItem {
    pub kind: BriefingItemType,
    pub text: String,
}

/// Human-readable mission briefing, appended to while the mission is built
/// and rendered by the packaging pipeline afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Briefing {
    remarks: Vec<String>,
    items: Vec<BriefingItem>,
}

impl Briefing {
    pub fn append_remark(&mut self, text: impl Into<String>) {
        self.remarks.push(text.into());
    }

    pub fn append_item(&mut self, kind: BriefingItemType, text: impl Into<String>) {
        self.items.push(BriefingItem {
            kind,
            text: text.into(),
        });
    }

    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    pub fn items(&self) -> &[BriefingItem] {
        &self.items
    }

    /// Items of one category, in append order.
    pub fn items_of(&self, kind: BriefingItemType) -> impl Iterator<Item = &BriefingItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}
