//! Host-facing raster function.
//!
//! Wraps setup, selection, and adaptation in the lifecycle a tiled raster
//! engine drives: describe parameters, negotiate raster info once, then
//! for every tile ask which raster to fetch and hand back the fetched
//! block for adaptation.

use raster_common::{CellSizeResolver, ProjectedCellSize, SpatialReference};
use serde::{Deserialize, Serialize};

use crate::adapt::adapt;
use crate::config::SelectorConfig;
use crate::error::{Result, SelectError};
use crate::negotiate::configure;
use crate::pixel::PixelBlock;
use crate::select::select_source;
use crate::types::{PixelBlocks, RasterDescriptor, RasterId, SelectionContext, TileRequest};

/// Kind of value a declared parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterDataType {
    Raster,
    Numeric,
}

/// A parameter the function declares to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    pub name: String,
    pub data_type: ParameterDataType,
    pub value: Option<f64>,
    pub required: bool,
    pub display_name: String,
    pub description: String,
}

/// Flags the host reads before invoking the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfiguration {
    /// Per-pixel masks must be supplied with both inputs.
    pub input_mask: bool,
}

/// Output context the host supplies at setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputInfo {
    pub spatial_reference: SpatialReference,
}

/// Everything the host passes at setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterInfoRequest {
    pub r1: RasterDescriptor,
    pub r2: RasterDescriptor,
    pub output: OutputInfo,
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl RasterInfoRequest {
    /// Parse a setup request from JSON.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Fill the threshold from `config` when the request leaves it unset.
    ///
    /// Fails if `config` does not validate.
    pub fn with_config_default(mut self, config: &SelectorConfig) -> Result<Self> {
        config.validate().map_err(SelectError::Config)?;
        if self.threshold.is_none() {
            self.threshold = config.threshold_override();
        }
        Ok(self)
    }
}

/// Returns pixels from one of two rasters depending on the request
/// resolution.
#[derive(Debug, Clone, Default)]
pub struct SelectByPixelSize<R = ProjectedCellSize> {
    resolver: R,
}

impl SelectByPixelSize<ProjectedCellSize> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: CellSizeResolver> SelectByPixelSize<R> {
    /// Use a custom cell-size resolver.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn name(&self) -> &'static str {
        "Select by Pixel Size"
    }

    pub fn description(&self) -> &'static str {
        "This function returns pixels associated with one of two input rasters based on the request resolution."
    }

    pub fn parameter_info(&self) -> Vec<ParameterInfo> {
        vec![
            ParameterInfo {
                name: RasterId::R1.as_str().to_string(),
                data_type: ParameterDataType::Raster,
                value: None,
                required: true,
                display_name: "Raster 1".to_string(),
                description: "The raster that's returned when request cell size is lower than the \
                              'Cell Size Threshold'. A lower cell size value implies finer resolution."
                    .to_string(),
            },
            ParameterInfo {
                name: RasterId::R2.as_str().to_string(),
                data_type: ParameterDataType::Raster,
                value: None,
                required: true,
                display_name: "Raster 2".to_string(),
                description: "The raster that's returned when request cell size is higher than or \
                              equal to the 'Cell Size Threshold'. A higher cell size value implies \
                              coarser resolution."
                    .to_string(),
            },
            ParameterInfo {
                name: "threshold".to_string(),
                data_type: ParameterDataType::Numeric,
                value: Some(0.0),
                required: true,
                display_name: "Cell Size Threshold".to_string(),
                description: "The cell size threshold in the units of input rasters' coordinate \
                              system that controls which of the two input rasters contributes \
                              pixels to the output."
                    .to_string(),
            },
        ]
    }

    pub fn configuration(&self) -> FunctionConfiguration {
        FunctionConfiguration { input_mask: true }
    }

    /// Negotiate output geometry and fix the threshold for the session.
    pub fn update_raster_info(&self, request: &RasterInfoRequest) -> Result<SelectionContext> {
        configure(
            &request.r1,
            &request.r2,
            request.output.spatial_reference,
            request.threshold,
        )
    }

    /// Which raster the host should fetch for `tile`.
    pub fn select_rasters(&self, ctx: &SelectionContext, tile: &TileRequest) -> Result<RasterId> {
        select_source(ctx, tile, &self.resolver)
    }

    /// Produce the output block for `tile` from the fetched blocks.
    pub fn update_pixels(
        &self,
        ctx: &SelectionContext,
        tile: &TileRequest,
        blocks: &PixelBlocks,
    ) -> Result<PixelBlock> {
        let id = self.select_rasters(ctx, tile)?;
        let block = blocks.get(id).ok_or(SelectError::MissingPixelBlock(id))?;
        adapt(block, &tile.shape, tile.props.pixel_type)
    }
}
