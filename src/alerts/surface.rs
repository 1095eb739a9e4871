// SPDX-License-Identifier: MPL-2.0
//! Presentation surface seam.

use super::ActiveAlert;

/// Where the active alert is drawn.
///
/// The queue calls [`Surface::show`] each time an alert becomes active and
/// [`Surface::hide`] when it is dismissed. Implementations own a single
/// region and reuse it for every alert; they must tolerate `hide` when
/// nothing was shown.
pub trait Surface {
    fn show(&mut self, active: &ActiveAlert);
    fn hide(&mut self);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn show(&mut self, active: &ActiveAlert) {
        (**self).show(active);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}
