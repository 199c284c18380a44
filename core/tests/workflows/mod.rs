// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod assignments;
mod config_driven;
mod event_lifecycle;
mod ride_board;
