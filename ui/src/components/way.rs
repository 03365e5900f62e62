//! "Ways to improve" content block.

use dioxus::prelude::*;
use tracing::warn;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WayCategory {
    Concentration,
    Memory,
}

impl WayCategory {
    /// Accepts the Korean category names used across the product
    /// (`집중력`, `기억력`) as well as their English slugs.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "집중력" | "concentration" => Some(Self::Concentration),
            "기억력" | "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Concentration => t!("way-category-concentration"),
            Self::Memory => t!("way-category-memory"),
        }
    }

    fn intro(&self) -> String {
        match self {
            Self::Concentration => t!("way-concentration-intro"),
            Self::Memory => t!("way-memory-intro"),
        }
    }

    pub fn tips(&self) -> Vec<String> {
        match self {
            Self::Concentration => vec![
                t!("way-concentration-tip-sleep"),
                t!("way-concentration-tip-pomodoro"),
                t!("way-concentration-tip-distraction"),
                t!("way-concentration-tip-exercise"),
            ],
            Self::Memory => vec![
                t!("way-memory-tip-recall"),
                t!("way-memory-tip-spacing"),
                t!("way-memory-tip-sleep"),
                t!("way-memory-tip-association"),
            ],
        }
    }
}

#[component]
pub fn WaysToImprove(category: String) -> Element {
    let Some(kind) = WayCategory::from_label(&category) else {
        warn!(%category, "no improvement tips for category");
        return rsx! {};
    };

    let heading = kind.label();
    let intro = kind.intro();
    let tips = kind.tips();

    rsx! {
        section { class: "way",
            h3 { class: "way__category", "{heading}" }
            p { class: "way__intro", "{intro}" }
            ol { class: "way__tips",
                for tip in tips.iter() {
                    li { class: "way__tip", "{tip}" }
                }
            }
        }
    }
}
