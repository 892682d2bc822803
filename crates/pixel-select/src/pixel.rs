//! Typed pixel arrays and blocks.
//!
//! Pixel blocks arrive from the host as either `row x col` or
//! `band x row x col` arrays of one of a handful of primitive types.
//! `PixelData` keeps the element type as a runtime tag so a single block
//! type can carry any of them.

use std::fmt;
use std::str::FromStr;

use ndarray::{ArrayD, Axis, IxDyn, Slice};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};

/// Element type of a pixel array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PixelType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl PixelType {
    pub const ALL: [PixelType; 8] = [
        PixelType::U8,
        PixelType::I8,
        PixelType::U16,
        PixelType::I16,
        PixelType::U32,
        PixelType::I32,
        PixelType::F32,
        PixelType::F64,
    ];

    /// Get the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl FromStr for PixelType {
    type Err = SelectError;

    /// Accepts Rust names ("f32") and array-protocol codes ("f4", "u1").
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let code = normalized.trim_start_matches(|c: char| matches!(c, '<' | '>' | '|' | '='));
        match code {
            "u8" | "u1" | "uint8" => Ok(Self::U8),
            "i8" | "i1" | "int8" => Ok(Self::I8),
            "u16" | "u2" | "uint16" => Ok(Self::U16),
            "i16" | "i2" | "int16" => Ok(Self::I16),
            "u32" | "u4" | "uint32" => Ok(Self::U32),
            "i32" | "i4" | "int32" => Ok(Self::I32),
            "f32" | "f4" | "float32" => Ok(Self::F32),
            "f64" | "f8" | "float64" => Ok(Self::F64),
            _ => Err(SelectError::Config(format!("unknown pixel type: {}", s))),
        }
    }
}

impl TryFrom<String> for PixelType {
    type Error = SelectError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PixelType> for String {
    fn from(ty: PixelType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dynamically-shaped pixel array tagged with its element type.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    U8(ArrayD<u8>),
    I8(ArrayD<i8>),
    U16(ArrayD<u16>),
    I16(ArrayD<i16>),
    U32(ArrayD<u32>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

macro_rules! each_variant {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            PixelData::U8($array) => $body,
            PixelData::I8($array) => $body,
            PixelData::U16($array) => $body,
            PixelData::I16($array) => $body,
            PixelData::U32($array) => $body,
            PixelData::I32($array) => $body,
            PixelData::F32($array) => $body,
            PixelData::F64($array) => $body,
        }
    };
}

macro_rules! map_variant {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            PixelData::U8($array) => PixelData::U8($body),
            PixelData::I8($array) => PixelData::I8($body),
            PixelData::U16($array) => PixelData::U16($body),
            PixelData::I16($array) => PixelData::I16($body),
            PixelData::U32($array) => PixelData::U32($body),
            PixelData::I32($array) => PixelData::I32($body),
            PixelData::F32($array) => PixelData::F32($body),
            PixelData::F64($array) => PixelData::F64($body),
        }
    };
}

fn cast_array<S, D>(array: &ArrayD<S>) -> ArrayD<D>
where
    S: AsPrimitive<D>,
    D: Copy + 'static,
{
    array.mapv(|v| v.as_())
}

fn cast_to<S>(array: &ArrayD<S>, target: PixelType) -> PixelData
where
    S: AsPrimitive<u8>
        + AsPrimitive<i8>
        + AsPrimitive<u16>
        + AsPrimitive<i16>
        + AsPrimitive<u32>
        + AsPrimitive<i32>
        + AsPrimitive<f32>
        + AsPrimitive<f64>,
{
    match target {
        PixelType::U8 => PixelData::U8(cast_array(array)),
        PixelType::I8 => PixelData::I8(cast_array(array)),
        PixelType::U16 => PixelData::U16(cast_array(array)),
        PixelType::I16 => PixelData::I16(cast_array(array)),
        PixelType::U32 => PixelData::U32(cast_array(array)),
        PixelType::I32 => PixelData::I32(cast_array(array)),
        PixelType::F32 => PixelData::F32(cast_array(array)),
        PixelType::F64 => PixelData::F64(cast_array(array)),
    }
}

/// Which bands of a block to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSelection {
    /// Keep the block as is (single-band source).
    All,
    /// Keep only band 0 and drop the band axis.
    First,
    /// Keep bands `0..n` along the leading axis.
    Leading(usize),
}

impl PixelData {
    /// Build a block from a flat row-major buffer.
    pub fn from_shape_vec<T>(shape: &[usize], data: Vec<T>) -> Result<Self>
    where
        T: Element,
    {
        let array = ArrayD::from_shape_vec(IxDyn(shape), data)?;
        Ok(T::wrap(array))
    }

    /// Element type of this array.
    pub fn pixel_type(&self) -> PixelType {
        match self {
            Self::U8(_) => PixelType::U8,
            Self::I8(_) => PixelType::I8,
            Self::U16(_) => PixelType::U16,
            Self::I16(_) => PixelType::I16,
            Self::U32(_) => PixelType::U32,
            Self::I32(_) => PixelType::I32,
            Self::F32(_) => PixelType::F32,
            Self::F64(_) => PixelType::F64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        each_variant!(self, a => a.shape())
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of bands: 1 for a 2-D array, else the leading dimension.
    pub fn band_count(&self) -> usize {
        match self.shape() {
            [_, _] => 1,
            [bands, ..] => *bands,
            [] => 0,
        }
    }

    /// Copy out the selected bands.
    ///
    /// Rows and columns are always kept whole. A leading band axis of
    /// length one is dropped, so single-band results are 2-D.
    pub fn select_bands(&self, selection: BandSelection) -> Result<PixelData> {
        match self.ndim() {
            2 | 3 => {}
            n => {
                return Err(SelectError::invalid_shape(format!(
                    "pixel block must be 2-D or 3-D, got {}-D",
                    n
                )))
            }
        }

        if let BandSelection::Leading(n) = selection {
            if self.ndim() != 3 || n > self.band_count() {
                return Err(SelectError::invalid_shape(format!(
                    "cannot take {} bands from shape {:?}",
                    n,
                    self.shape()
                )));
            }
        }
        if selection == BandSelection::First && self.ndim() != 3 {
            return Err(SelectError::invalid_shape(format!(
                "cannot index band axis of shape {:?}",
                self.shape()
            )));
        }

        let selected = map_variant!(self, a => match selection {
            BandSelection::All => a.to_owned(),
            BandSelection::First => a.index_axis(Axis(0), 0).to_owned(),
            BandSelection::Leading(n) => a.slice_axis(Axis(0), Slice::from(..n)).to_owned(),
        });

        Ok(selected.squeeze_band_axis())
    }

    /// Drop a leading band axis of length one. Row and column axes are
    /// kept even when they have length one.
    fn squeeze_band_axis(self) -> PixelData {
        if self.ndim() == 3 && self.shape()[0] == 1 {
            map_variant!(self, a => a.index_axis_move(Axis(0), 0))
        } else {
            self
        }
    }

    /// Convert to `target`, returning `self` untouched if it already matches.
    ///
    /// Uses `as` cast semantics: float to integer truncates toward zero and
    /// saturates, NaN becomes zero.
    pub fn into_type(self, target: PixelType) -> PixelData {
        if self.pixel_type() == target {
            return self;
        }
        each_variant!(&self, a => cast_to(a, target))
    }
}

/// Primitive element types that can back a `PixelData`.
pub trait Element: Copy + 'static {
    fn wrap(array: ArrayD<Self>) -> PixelData;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            fn wrap(array: ArrayD<Self>) -> PixelData {
                PixelData::$variant(array)
            }
        }

        impl From<ArrayD<$ty>> for PixelData {
            fn from(array: ArrayD<$ty>) -> Self {
                PixelData::$variant(array)
            }
        }
    };
}

impl_element!(u8, U8);
impl_element!(i8, I8);
impl_element!(u16, U16);
impl_element!(i16, I16);
impl_element!(u32, U32);
impl_element!(i32, I32);
impl_element!(f32, F32);
impl_element!(f64, F64);

/// Pixels plus their per-pixel validity mask.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBlock {
    pub pixels: PixelData,
    pub mask: PixelData,
}

impl PixelBlock {
    pub fn new(pixels: impl Into<PixelData>, mask: impl Into<PixelData>) -> Self {
        Self {
            pixels: pixels.into(),
            mask: mask.into(),
        }
    }
}
