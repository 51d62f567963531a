// This file is part of hex-util.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stateless helpers for `0x`-prefixed hex strings and text/byte conversions.
//!
//! The strongly typed functions are re-exported at the crate root. The [value] module offers
//! the same operations over [serde_json::Value] for callers whose inputs are only typed at
//! runtime, e.g. ABI parameter records.

pub mod value;

mod collection;
mod int;
mod prefix;
mod text;

pub use collection::*;
pub use int::*;
pub use prefix::*;
pub use text::*;
