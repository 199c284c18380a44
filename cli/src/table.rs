// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

use crate::util::OutputFormat;

/// A column of a table rendering items of type `T`.
pub trait TableColumn<T> {
    /// Column name, used as the key of JSON output.
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub struct Table<'a, T, C: TableColumn<T>> {
    format: OutputFormat,
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(format: OutputFormat, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            format,
            columns,
            data,
            separator: " ",
        }
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }

    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.cells();
        let widths = column_max_width(self.columns.len(), &table);

        for (cells, row) in table.iter().zip(self.data) {
            for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let last = i == self.columns.len() - 1;
                let pad = " ".repeat(widths[i].saturating_sub(cell.width()));
                let cell = match col.padding_direction() {
                    PaddingDirection::Left if last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{pad}"),
                    PaddingDirection::Right => format!("{pad}{cell}"),
                };

                match col.color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                if last {
                    writeln!(f)?;
                } else {
                    write!(f, "{}", self.separator)?;
                }
            }
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = self
            .cells()
            .into_iter()
            .map(|cells| {
                self.columns
                    .iter()
                    .zip(cells)
                    .map(|(col, cell)| (col.name().into_owned(), cell.into_owned().into()))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => self.fmt_json(f),
            OutputFormat::Table => self.fmt_basic(f),
        }
    }
}

fn column_max_width(columns: usize, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}

/// Parses a `#rrggbb` color.
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
