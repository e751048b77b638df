// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Hand-off points to the map renderer and the social network client.
//!
//! The bot only decides *what* to draw and *what* to say. Drawing tiles and
//! talking to a posting API happen behind [`MapRenderer`] and [`Poster`].

use crate::airport::Airport;
use crate::config::BotConfig;
use crate::geo::{BoundingBox, LatLon};
use crate::message::compose_message;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Aerial,
    Street,
}

impl MapStyle {
    pub const ALL: [MapStyle; 2] = [MapStyle::Aerial, MapStyle::Street];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Aerial => "aerial",
            MapStyle::Street => "osm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderJob {
    pub icao: String,
    pub name: String,
    pub style: MapStyle,
    pub bbox: BoundingBox,
    pub center: LatLon,
    pub size_px: u32,
}

impl RenderJob {
    pub fn new(airport: &Airport, style: MapStyle, margin: f64, size_px: u32) -> Self {
        Self {
            icao: airport.icao.clone(),
            name: airport.name.clone(),
            style,
            bbox: airport.bounding_box(margin),
            center: airport.position,
            size_px,
        }
    }

    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.icao, self.style.as_str())
    }
}

pub trait MapRenderer {
    /// Produces the image for `job` and returns where it landed.
    fn render(&mut self, job: &RenderJob) -> Result<PathBuf, PublishError>;
}

/// Writes each job as `<ICAO>-<style>.json` for an external tile renderer.
pub struct JobFileRenderer {
    output_dir: PathBuf,
}

impl JobFileRenderer {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl MapRenderer for JobFileRenderer {
    fn render(&mut self, job: &RenderJob) -> Result<PathBuf, PublishError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.json", job.file_stem()));
        fs::write(&path, serde_json::to_string_pretty(job)?)?;
        log::info!("Render job for {} written to {}", job.icao, path.display());
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub icao: String,
    pub status: String,
    pub media: Vec<PathBuf>,
    pub visibility: String,
    pub language: String,
}

pub trait Poster {
    fn post(&mut self, post: &Post) -> Result<(), PublishError>;
}

/// Stores the status text as `<ICAO>.txt` instead of publishing it.
pub struct DryRunPoster {
    output_dir: PathBuf,
}

impl DryRunPoster {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl Poster for DryRunPoster {
    fn post(&mut self, post: &Post) -> Result<(), PublishError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.txt", post.icao));
        fs::write(&path, &post.status)?;
        log::info!(
            "Dry run: {} post with {} attachment(s) saved to {}",
            post.visibility,
            post.media.len(),
            path.display()
        );
        Ok(())
    }
}

/// Renders both map styles, then posts the composed message with the images
/// attached. Stops at the first failure.
pub fn publish(
    airport: &Airport,
    config: &BotConfig,
    renderer: &mut dyn MapRenderer,
    poster: &mut dyn Poster,
) -> Result<Post, PublishError> {
    let mut media = Vec::with_capacity(MapStyle::ALL.len());
    for style in MapStyle::ALL {
        let job = RenderJob::new(airport, style, config.margin_deg, config.image_size_px);
        media.push(renderer.render(&job)?);
    }

    let post = Post {
        icao: airport.icao.clone(),
        status: compose_message(airport, &config.hashtags),
        media,
        visibility: config.visibility.clone(),
        language: config.language.clone(),
    };
    poster.post(&post)?;
    Ok(post)
}
