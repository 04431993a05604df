use crate::error::{Result, VocabError};
use crate::vocabulary::Level;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORKBOOK: &str = "SO'Z BOYLIGI (A1, A2, B1, B2, C1, C2).xlsx";
pub const DEFAULT_OUTPUT: &str = "data.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_sheet_groups")]
    pub sheets: Vec<SheetGroup>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub workbook: PathBuf,
    /// Leading rows of every sheet that hold the table heading.
    pub skip_rows: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub pretty: bool,
}

/// One named sheet and how to read vocabulary out of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SheetGroup {
    pub sheet: String,
    /// Name used in progress output; defaults to the sheet name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub level: Level,
    pub layout: SheetLayout,
}

/// Column layout of a sheet. Column indices are zero-based (A = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SheetLayout {
    /// One `term — translation` cell per row; heading rows are recognised
    /// from the split term.
    Combined { column: usize },
    /// One `term — translation` cell per row; heading rows become the running
    /// topic of the rows below them.
    TopicHeaders { column: usize },
    /// Like `TopicHeaders`, but any cell containing `#` is a topic row.
    TopicMarkers { column: usize },
    /// Term and translation in separate columns.
    Columns { term: usize, translation: usize },
    /// Phrasal verb, translation, and English definition columns.
    Phrasal {
        term: usize,
        translation: usize,
        definition: usize,
    },
}

impl SheetGroup {
    pub fn new<S: Into<String>>(sheet: S, level: Level, layout: SheetLayout) -> Self {
        Self {
            sheet: sheet.into(),
            label: None,
            level,
            layout,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.sheet)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            sheets: default_sheet_groups(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            skip_rows: 1,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            pretty: false,
        }
    }
}

/// The sheets of the vocabulary workbook, in output order.
pub fn default_sheet_groups() -> Vec<SheetGroup> {
    let mut groups: Vec<SheetGroup> = Level::TIERS
        .iter()
        .map(|tier| SheetGroup::new(tier.as_str(), *tier, SheetLayout::Combined { column: 1 }))
        .collect();

    groups.extend([
        SheetGroup::new(
            "Fellar 650 ta",
            Level::Verbs,
            SheetLayout::Combined { column: 0 },
        )
        .with_label("Verbs"),
        SheetGroup::new(
            "Destination B1 ozbekcha tarjima",
            Level::DestB1,
            SheetLayout::TopicHeaders { column: 0 },
        )
        .with_label("Destination B1"),
        SheetGroup::new(
            "Destination B2 ozbekcha tarjima",
            Level::DestB2,
            SheetLayout::TopicMarkers { column: 0 },
        )
        .with_label("Destination B2"),
        SheetGroup::new(
            "Destination C1&C2 ozbekcha tarj",
            Level::DestC1C2,
            SheetLayout::Columns {
                term: 0,
                translation: 1,
            },
        )
        .with_label("Destination C1&C2"),
        SheetGroup::new(
            "Phrasal verbs Destination B2,C1",
            Level::Phrasal,
            SheetLayout::Phrasal {
                term: 0,
                translation: 1,
                definition: 2,
            },
        )
        .with_label("Phrasal Verbs"),
    ]);

    groups
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VocabError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| VocabError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| VocabError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["vocab-extract.toml", ".vocab-extract.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref workbook) = cli_args.workbook {
            self.input.workbook = workbook.clone();
        }

        if let Some(ref output) = cli_args.output {
            self.output.path = output.clone();
        }

        if cli_args.pretty {
            self.output.pretty = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sheets.is_empty() {
            return Err(VocabError::Config {
                message: "At least one sheet must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for group in &self.sheets {
            if group.sheet.is_empty() {
                return Err(VocabError::Config {
                    message: "Sheet names must not be empty".to_string(),
                });
            }
            if !seen.insert(group.sheet.as_str()) {
                return Err(VocabError::Config {
                    message: format!("Sheet '{}' is configured more than once", group.sheet),
                });
            }
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(VocabError::Config {
                message: "Output path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> Result<String> {
        toml::to_string_pretty(&Self::default()).map_err(|e| VocabError::Config {
            message: format!("Failed to serialize sample config: {}", e),
        })
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub workbook: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workbook(mut self, workbook: Option<PathBuf>) -> Self {
        self.workbook = workbook;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
