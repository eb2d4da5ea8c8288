use crate::constants::*;
use crate::lang::{Labels, Lookup};
use crate::types::*;
use crate::units::{parse_box, parse_margin};
use log::{info, warn};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Poster tiling configuration, as given by the user
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileOptions {
    // Sheets
    pub media: String,
    pub cut_margin: String,
    pub white_margin: String,
    pub manual_feed: bool,

    // Poster size: a target box or a linear scale, at most one of them
    pub poster: Option<String>,
    pub scale: Option<f64>,

    /// Input image size, overriding the bounding box in the input
    pub image: Option<String>,

    // Decorations
    pub alignment_marks: bool,
    pub title: String,
    pub handle: String,
    pub branding: Branding,

    // Labels
    pub language: String,
    pub translations_dir: Option<PathBuf>,

    /// Output file; standard output when unset
    pub output: Option<PathBuf>,

    /// Refuse plans with more sheets than this
    pub max_sheets: usize,

    /// Add an `%%Orientation` comment to the output header
    pub orientation_comment: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            media: DEFAULT_MEDIA.to_string(),
            cut_margin: DEFAULT_CUT_MARGIN.to_string(),
            white_margin: DEFAULT_WHITE_MARGIN.to_string(),
            manual_feed: false,
            poster: None,
            scale: None,
            image: None,
            alignment_marks: false,
            title: String::new(),
            handle: String::new(),
            branding: Branding::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            translations_dir: None,
            output: None,
            max_sheets: DEFAULT_MAX_SHEETS,
            orientation_comment: false,
        }
    }
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.media.trim().is_empty() {
            return Err(TileError::Config("No media size specified".to_string()));
        }

        if let Some(scale) = self.scale {
            if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
                return Err(TileError::InvalidScale(scale));
            }
        }

        if self.max_sheets == 0 {
            return Err(TileError::Config(
                "Sheet limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Directory searched for translation tables
    pub fn translations_dir(&self) -> PathBuf {
        self.translations_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Parse every specification and settle the defaults.
    pub fn resolve(&self, lookup: &dyn Lookup) -> Result<RunConfig> {
        self.validate()?;

        let media = parse_box(&self.media)?;
        if media.is_landscape() {
            return Err(TileError::InvalidMedia(
                "media should always be specified in portrait format".to_string(),
            ));
        }
        if media.width() <= MIN_MEDIA_SIZE || media.height() <= MIN_MEDIA_SIZE {
            return Err(TileError::InvalidMedia(format!(
                "media size {} x {} pt is ridiculous",
                media.width(),
                media.height()
            )));
        }

        let request = match (self.scale, &self.poster) {
            (Some(_), Some(poster)) => {
                warn!("Please don't specify both a scale and a poster size, ignoring the scale");
                SizeRequest::Poster(parse_box(poster)?)
            }
            (None, Some(poster)) => SizeRequest::Poster(parse_box(poster)?),
            (Some(scale), None) => SizeRequest::Scale(scale),
            (None, None) => {
                info!(
                    "Defaulting poster size to media size of {}",
                    self.media
                );
                SizeRequest::Poster(media)
            }
        };

        info!("Using cutmargin of {}", self.cut_margin);
        let cut_margin = parse_margin(&self.cut_margin, &media)?;
        info!("Using whitemargin of {}", self.white_margin);
        let white_margin = parse_margin(&self.white_margin, &media)?;

        let image = self.image.as_deref().map(parse_box).transpose()?;

        Ok(RunConfig {
            media_name: self.media.clone(),
            media,
            image,
            cut_margin,
            white_margin,
            request,
            manual_feed: self.manual_feed,
            alignment_marks: self.alignment_marks,
            title: self.title.clone(),
            handle: self.handle.clone(),
            labels: Labels::resolve(lookup),
            branding: self.branding.clone(),
            max_sheets: self.max_sheets,
            orientation_comment: self.orientation_comment,
        })
    }
}

/// Everything a run needs, parsed and checked
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Media as written by the user, repeated in `%%DocumentMedia`
    pub media_name: String,
    pub media: PageBox,
    pub image: Option<PageBox>,
    pub cut_margin: Margin,
    pub white_margin: Margin,
    pub request: SizeRequest,
    pub manual_feed: bool,
    pub alignment_marks: bool,
    pub title: String,
    pub handle: String,
    pub labels: Labels,
    pub branding: Branding,
    pub max_sheets: usize,
    pub orientation_comment: bool,
}
