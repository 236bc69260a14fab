//! Application state

use crate::error::AppError;
use sheet_core::{convert_with_rules, load_character, ConversionRules, StatBlock};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summary,
    Source,
    Converted,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Summary, Tab::Source, Tab::Converted, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Source => "Source",
            Tab::Converted => "Improved Initiative",
            Tab::Help => "Help",
        }
    }

    fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }
}

/// A character that passed validation, with both JSON renderings
#[derive(Debug, Clone)]
pub struct Loaded {
    pub input: PathBuf,
    /// The validated export, re-serialized (only the fields the converter reads)
    pub source_json: String,
    pub block: StatBlock,
    pub block_json: String,
}

impl Loaded {
    /// Read, validate and convert an export
    pub fn from_path(input: &Path, rules: &ConversionRules) -> Result<Self, AppError> {
        let character = load_character(input)?;
        let block = convert_with_rules(&character, rules);
        tracing::info!(input = %input.display(), "converted {}", block.type_line);
        Ok(Loaded {
            input: input.to_path_buf(),
            source_json: serde_json::to_string_pretty(&character)?,
            block_json: block.to_json_pretty()?,
            block,
        })
    }
}

pub struct App {
    pub current_tab: Tab,
    pub loaded: Option<Loaded>,
    /// Shown instead of the tabs when loading failed
    pub error: Option<String>,
    /// Last save result, shown in the footer
    pub status: Option<String>,
    scroll: [usize; 4],
}

impl App {
    pub fn new(input: Option<&Path>, rules: &ConversionRules) -> Self {
        let result = input
            .ok_or(AppError::MissingContext)
            .and_then(|path| Loaded::from_path(path, rules));

        let (loaded, error) = match result {
            Ok(loaded) => (Some(loaded), None),
            Err(e) => {
                tracing::warn!("{}", e);
                (None, Some(e.to_string()))
            }
        };

        App {
            current_tab: Tab::Summary,
            loaded,
            error,
            status: None,
            scroll: [0; 4],
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let next_idx = (self.current_tab.index() + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = self.current_tab.index();
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll[self.current_tab.index()]
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.line_count().saturating_sub(1);
        let slot = &mut self.scroll[self.current_tab.index()];
        *slot = slot.saturating_add_signed(delta).min(max);
    }

    pub fn on_up(&mut self) {
        self.scroll_by(-1);
    }

    pub fn on_down(&mut self) {
        self.scroll_by(1);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-20);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(20);
    }

    /// JSON shown on the current tab, if it has any
    pub fn current_json(&self) -> Option<&str> {
        let loaded = self.loaded.as_ref()?;
        match self.current_tab {
            Tab::Source => Some(&loaded.source_json),
            Tab::Summary | Tab::Converted => Some(&loaded.block_json),
            Tab::Help => None,
        }
    }

    /// Lines on the current tab, which bounds its scroll offset
    fn line_count(&self) -> usize {
        match (&self.loaded, self.current_tab) {
            (Some(loaded), Tab::Summary) => crate::ui::summary_line_count(&loaded.block),
            _ => self.current_json().map_or(0, |json| json.lines().count()),
        }
    }

    /// Where `save_current` writes for the current tab
    pub fn save_path(&self) -> Option<PathBuf> {
        let loaded = self.loaded.as_ref()?;
        let suffix = match self.current_tab {
            Tab::Source => "source.json",
            Tab::Summary | Tab::Converted => "ii.json",
            Tab::Help => return None,
        };
        Some(sibling_path(&loaded.input, suffix))
    }

    /// Write the current tab's JSON next to the input file
    pub fn save_current(&mut self) -> Result<Option<PathBuf>, AppError> {
        let (Some(path), Some(json)) = (self.save_path(), self.current_json()) else {
            return Ok(None);
        };
        fs::write(&path, json).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "saved");
        Ok(Some(path))
    }

    /// Save and record the outcome for the footer
    pub fn on_save(&mut self) {
        self.status = match self.save_current() {
            Ok(Some(path)) => Some(format!("Saved {}", path.display())),
            Ok(None) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}

/// `dir/brunhild.json` + `ii.json` -> `dir/brunhild.ii.json`
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "character".to_string());
    input.with_file_name(format!("{}.{}", stem, suffix))
}
