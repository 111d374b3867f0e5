//! TOML configuration: byte order, index style, output, traversal and struct fields.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use structdump::{
    errors::ConfigError,
    layout::StructLayout,
    order::RenderOptions,
    serde::{ByteOrderDef, FieldDef, HexRenderDef, IndexStyleDef, LayoutDef, PlanDef},
    traversal::{DumpOptions, TraversalPlan},
};

use crate::sink::Sink;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Console,
    File,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub sink: SinkKind,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub byte_order: ByteOrderDef,
    #[serde(default)]
    pub index_style: IndexStyleDef,
    #[serde(default)]
    pub render: HexRenderDef,
    #[serde(default)]
    pub output: OutputConfig,
    pub traversal: PlanDef,
    /// Struct fields in memory order.
    pub fields: Vec<FieldDef>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn layout(&self) -> Result<StructLayout, ConfigError> {
        StructLayout::try_from(&LayoutDef {
            fields: self.fields.clone(),
        })
    }

    pub fn plan(&self) -> Result<TraversalPlan, ConfigError> {
        TraversalPlan::try_from(self.traversal)
    }

    pub fn dump_options(&self) -> DumpOptions {
        DumpOptions {
            render: RenderOptions::new(self.byte_order.into()).with_render(self.render.into()),
            index_style: self.index_style.into(),
        }
    }

    /// Sink declared by the `[output]` table.
    pub fn sink(&self) -> Result<Sink> {
        match (self.output.sink, &self.output.path) {
            (SinkKind::Console, _) => Ok(Sink::Console),
            (SinkKind::File, Some(path)) => Ok(Sink::File(path.clone())),
            (SinkKind::File, None) => bail!("output.sink = \"file\" requires output.path"),
        }
    }

    /// Sink after command-line overrides: `--output` wins over `--console`,
    /// which wins over the `[output]` table.
    pub fn resolve_sink(&self, output: Option<PathBuf>, console: bool) -> Result<Sink> {
        match (output, console) {
            (Some(path), _) => Ok(Sink::File(path)),
            (None, true) => Ok(Sink::Console),
            (None, false) => self.sink(),
        }
    }
}

/// Parses an address given as `0x`-prefixed hex or decimal.
pub fn parse_address(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u64>(),
    };

    parsed.map_err(|e| format!("invalid address `{s}`: {e}"))
}
