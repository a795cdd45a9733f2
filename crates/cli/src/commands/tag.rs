// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jd tag`: print the image tag.

use super::Loaded;

pub fn handle(loaded: Loaded) {
    println!("{}", jd_config::image_tag(&loaded.config, &loaded.project));
}
