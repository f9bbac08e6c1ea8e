//! Shared color constants for the UI.

use catalog_business::Sex;
use egui::Color32;

/// Link blue, used for male owners.
pub const COLOR_LINK: Color32 = Color32::from_rgb(72, 95, 199);

/// Danger red, used for female owners.
pub const COLOR_DANGER: Color32 = Color32::from_rgb(241, 70, 104);

/// Fill of an active category toggle.
pub const COLOR_INFO: Color32 = Color32::from_rgb(62, 142, 208);

/// Fill of the "All" category button while no category is selected.
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(72, 199, 142);

/// Text color of the owner cell.
#[inline]
pub fn user_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Male => COLOR_LINK,
        Sex::Female => COLOR_DANGER,
    }
}
