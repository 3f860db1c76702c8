// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flat tables and entity-relation schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic table: a header row plus data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub items: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ErDiagram {
    #[serde(default)]
    pub relations: Vec<Relation>,
    #[serde(default)]
    pub tables: Vec<ErTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Relation {
    pub table1: String,
    pub table2: String,
    pub relation: RelationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RelationKind {
    #[serde(rename = "=")]
    OneToOne,
    #[serde(rename = "<")]
    OneToMany,
    #[serde(rename = ">")]
    ManyToOne,
    #[serde(rename = "-")]
    ManyToMany,
}

impl RelationKind {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::OneToOne => "=",
            Self::OneToMany => "<",
            Self::ManyToOne => ">",
            Self::ManyToMany => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ErTable {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub attribute: ColumnAttribute,
}

/// Column data type with its optional length, e.g. `varchar(255)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnType {
    pub name: ColumnTypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl ColumnType {
    pub fn new(name: ColumnTypeName) -> Self {
        Self { name, length: None }
    }

    pub fn with_length(name: ColumnTypeName, length: u32) -> Self {
        Self { name, length: Some(length) }
    }

    /// Length to print in parentheses; a zero length is treated as unset.
    pub fn display_length(&self) -> Option<u32> {
        self.length.filter(|&length| length > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColumnTypeName {
    Int,
    Float,
    Boolean,
    Date,
    DateTime,
    Char,
    Varchar,
    Text,
    Blob,
    Uuid,
    Decimal,
    Enum,
}

impl ColumnTypeName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Uuid => "uuid",
            Self::Decimal => "decimal",
            Self::Enum => "enum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "name")]
pub enum ColumnAttribute {
    #[serde(rename = "pk")]
    PrimaryKey,
    /// References another table, e.g. `fk users`.
    #[serde(rename = "fk")]
    ForeignKey { value: String },
    #[serde(rename = "unique")]
    Unique,
    #[serde(rename = "not null")]
    NotNull,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "increment")]
    Increment,
    #[serde(rename = "default")]
    Default { value: String },
    #[serde(rename = "index")]
    Index,
}

impl ColumnAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimaryKey => "pk",
            Self::ForeignKey { .. } => "fk",
            Self::Unique => "unique",
            Self::NotNull => "not null",
            Self::Null => "null",
            Self::Increment => "increment",
            Self::Default { .. } => "default",
            Self::Index => "index",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::ForeignKey { value } | Self::Default { value } => Some(value),
            Self::PrimaryKey
            | Self::Unique
            | Self::NotNull
            | Self::Null
            | Self::Increment
            | Self::Index => None,
        }
    }
}
