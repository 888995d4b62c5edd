// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Active-event selection.

use crate::types::Event;
use time::Date;

/// Selects the active event from a set of known events.
///
/// An event is active while its date has not passed. When several upcoming
/// events exist, the nearest one (earliest date, then earliest start time)
/// wins, so at most one event is active from the participant's
/// perspective.
#[must_use]
pub fn select_active_event(events: &[Event], today: Date) -> Option<&Event> {
    events
        .iter()
        .filter(|event| event.is_active(today))
        .min_by_key(|event| (event.date, event.start_time))
}
