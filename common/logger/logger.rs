/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing_subscriber::prelude::*;

/// Installs a process-wide fmt subscriber. Panics if a global subscriber is already set.
pub fn initialise_logging() {
    let default_layer = tracing_subscriber::fmt::layer().with_test_writer();
    let subscriber = tracing_subscriber::registry().with(default_layer);
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set up logging subscriber.");
}
