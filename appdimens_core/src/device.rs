// Copyright 2026 the AppDimens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device and UI-mode classification.

use core::fmt;

/// Coarse UI mode reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UiModeClass {
    /// A handheld phone or tablet.
    #[default]
    Normal,
    /// A car head unit.
    Car,
    /// A television.
    Television,
    /// A watch.
    Watch,
    /// A desk dock.
    Desk,
    /// A screenless appliance, or a desktop-class host such as macOS.
    Appliance,
    /// A VR headset.
    VrHeadset,
    /// The platform did not report a mode.
    Undefined,
}

impl UiModeClass {
    /// Every UI mode, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Normal,
        Self::Car,
        Self::Television,
        Self::Watch,
        Self::Desk,
        Self::Appliance,
        Self::VrHeadset,
        Self::Undefined,
    ];

    /// Decodes the type nibble of an Android `Configuration.uiMode` value.
    ///
    /// Night-mode and other flag bits are ignored. Unknown types map to
    /// [`UiModeClass::Normal`].
    #[must_use]
    pub const fn from_config_bits(ui_mode: u32) -> Self {
        match ui_mode & 0x0f {
            0x00 => Self::Undefined,
            0x02 => Self::Desk,
            0x03 => Self::Car,
            0x04 => Self::Television,
            0x05 => Self::Appliance,
            0x06 => Self::Watch,
            0x07 => Self::VrHeadset,
            _ => Self::Normal,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Car => "car",
            Self::Television => "television",
            Self::Watch => "watch",
            Self::Desk => "desk",
            Self::Appliance => "appliance",
            Self::VrHeadset => "vr_headset",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for UiModeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Device class derived from the smallest screen side and the UI mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Smallest side below 360.
    PhoneSmall,
    /// Smallest side in `[360, 600)`.
    #[default]
    PhoneNormal,
    /// Smallest side in `[600, 720)`.
    PhoneLarge,
    /// Smallest side in `[720, 960)`.
    TabletSmall,
    /// Smallest side of 960 or more.
    TabletLarge,
    /// Television UI mode.
    Tv,
    /// Watch UI mode.
    Watch,
    /// Car UI mode.
    Auto,
}

impl DeviceClass {
    /// Every device class, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::PhoneSmall,
        Self::PhoneNormal,
        Self::PhoneLarge,
        Self::TabletSmall,
        Self::TabletLarge,
        Self::Tv,
        Self::Watch,
        Self::Auto,
    ];

    /// Classifies a device.
    ///
    /// Television, watch and car UI modes win over size. Otherwise the
    /// smallest screen side picks the class.
    #[must_use]
    pub fn classify(smallest: f64, ui_mode: UiModeClass) -> Self {
        match ui_mode {
            UiModeClass::Television => Self::Tv,
            UiModeClass::Watch => Self::Watch,
            UiModeClass::Car => Self::Auto,
            _ if smallest < 360.0 => Self::PhoneSmall,
            _ if smallest < 600.0 => Self::PhoneNormal,
            _ if smallest < 720.0 => Self::PhoneLarge,
            _ if smallest < 960.0 => Self::TabletSmall,
            _ => Self::TabletLarge,
        }
    }

    /// Returns `true` for tablets and televisions.
    #[inline]
    #[must_use]
    pub const fn is_large_screen(self) -> bool {
        matches!(self, Self::TabletSmall | Self::TabletLarge | Self::Tv)
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhoneSmall => "phone_small",
            Self::PhoneNormal => "phone_normal",
            Self::PhoneLarge => "phone_large",
            Self::TabletSmall => "tablet_small",
            Self::TabletLarge => "tablet_large",
            Self::Tv => "tv",
            Self::Watch => "watch",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
