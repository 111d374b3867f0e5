//! Deserializable descriptions of layouts and traversal plans.
//!
//! These types mirror a user-edited configuration file. Numbers are signed so
//! that a negative size or index is reported as a [ConfigError] instead of a
//! parse failure; [TryFrom] converts them into core types.

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConfigError,
    field::FieldSpec,
    layout::StructLayout,
    order::{ByteOrder, HexRender},
    traversal::{GridPlan, IndexStyle, LinearPlan, TraversalPlan},
};

/// One field of a struct. The name `skip` declares a spacer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    /// Width in bytes.
    pub size: i64,
}

/// Ordered field list of a struct.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct LayoutDef {
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrderDef {
    #[default]
    Big,
    Little,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndexStyleDef {
    ZeroBased,
    #[default]
    OneBased,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HexRenderDef {
    #[default]
    Full,
    LastByte,
}

/// Traversal geometry, selected by the `mode` key.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlanDef {
    Linear {
        base_address: i64,
        index_start: i64,
        index_end: i64,
    },
    Grid {
        base_address: i64,
        inner_length: i64,
        x_start: i64,
        x_end: i64,
        y_start: i64,
        y_end: i64,
    },
}

fn non_negative(name: &str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::NegativeValue {
        name: name.to_string(),
        value,
    })
}

impl TryFrom<&FieldDef> for FieldSpec {
    type Error = ConfigError;

    fn try_from(value: &FieldDef) -> Result<Self, Self::Error> {
        let size = u64::try_from(value.size).map_err(|_| ConfigError::NegativeFieldSize {
            name: value.name.clone(),
            size: value.size,
        })?;

        Ok(FieldSpec::named(&value.name, size))
    }
}

impl TryFrom<&LayoutDef> for StructLayout {
    type Error = ConfigError;

    fn try_from(value: &LayoutDef) -> Result<Self, Self::Error> {
        let fields = value
            .fields
            .iter()
            .map(FieldSpec::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        StructLayout::compile(&fields)
    }
}

impl TryFrom<PlanDef> for TraversalPlan {
    type Error = ConfigError;

    fn try_from(value: PlanDef) -> Result<Self, Self::Error> {
        match value {
            PlanDef::Linear {
                base_address,
                index_start,
                index_end,
            } => Ok(TraversalPlan::Linear(LinearPlan {
                base_address: non_negative("base_address", base_address)?,
                index_start: non_negative("index_start", index_start)?,
                index_end: non_negative("index_end", index_end)?,
            })),
            PlanDef::Grid {
                base_address,
                inner_length,
                x_start,
                x_end,
                y_start,
                y_end,
            } => Ok(TraversalPlan::Grid(GridPlan {
                base_address: non_negative("base_address", base_address)?,
                inner_length: non_negative("inner_length", inner_length)?,
                x_start: non_negative("x_start", x_start)?,
                x_end: non_negative("x_end", x_end)?,
                y_start: non_negative("y_start", y_start)?,
                y_end: non_negative("y_end", y_end)?,
            })),
        }
    }
}

impl From<ByteOrderDef> for ByteOrder {
    fn from(value: ByteOrderDef) -> Self {
        match value {
            ByteOrderDef::Big => ByteOrder::Big,
            ByteOrderDef::Little => ByteOrder::Little,
        }
    }
}

impl From<IndexStyleDef> for IndexStyle {
    fn from(value: IndexStyleDef) -> Self {
        match value {
            IndexStyleDef::ZeroBased => IndexStyle::ZeroBased,
            IndexStyleDef::OneBased => IndexStyle::OneBased,
        }
    }
}

impl From<HexRenderDef> for HexRender {
    fn from(value: HexRenderDef) -> Self {
        match value {
            HexRenderDef::Full => HexRender::Full,
            HexRenderDef::LastByte => HexRender::LastByte,
        }
    }
}
