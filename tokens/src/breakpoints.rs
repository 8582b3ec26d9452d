token_table! {
    /// Minimum screen widths for each device class.
    pub struct BreakpointSystem / BreakpointOverrides {
        pub small_phone: u32,
        pub phone: u32,
        pub tablet: u32,
    }
}

token_keys! {
    pub enum BreakPoint for BreakpointSystem -> u32 {
        SmallPhone => small_phone = "smallPhone",
        Phone => phone = "phone",
        Tablet => tablet = "tablet",
    }
}

impl BreakpointSystem {
    /// `(name, min_width)` pairs for [`crate::Responsive::breakpoint`].
    pub fn entries(&self) -> [(&'static str, u32); 3] {
        [
            (BreakPoint::SmallPhone.as_str(), self.small_phone),
            (BreakPoint::Phone.as_str(), self.phone),
            (BreakPoint::Tablet.as_str(), self.tablet),
        ]
    }
}

token_table! {
    /// Layout widths used when switching between single and split panes.
    pub struct ResponsiveLayoutSystem / ResponsiveLayoutOverrides {
        pub small_phone: u32,
        pub phone: u32,
        pub tablet: u32,
    }
}

pub fn create_breakpoint_system() -> BreakpointSystem {
    BreakpointSystem {
        small_phone: 0,
        phone: 321,
        tablet: 768,
    }
}

pub fn create_responsive_layout_system() -> ResponsiveLayoutSystem {
    ResponsiveLayoutSystem {
        small_phone: 0,
        phone: 0,
        tablet: 576,
    }
}
