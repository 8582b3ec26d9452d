token_table! {
    /// Spacing scale in logical pixels.
    pub struct SpacingSystem / SpacingOverrides {
        pub xxl: u32,
        pub xl: u32,
        pub l: u32,
        pub ml: u32,
        pub m: u32,
        pub sm: u32,
        pub s: u32,
        pub xs: u32,
        pub xxs: u32,
    }
}

token_keys! {
    pub enum SpacingToken for SpacingSystem -> u32 {
        Xxl => xxl = "xxl",
        Xl => xl = "xl",
        L => l = "l",
        Ml => ml = "ml",
        M => m = "m",
        Sm => sm = "sm",
        S => s = "s",
        Xs => xs = "xs",
        Xxs => xxs = "xxs",
    }
}

pub fn create_spacing_system() -> SpacingSystem {
    SpacingSystem {
        xxl: 40,
        xl: 32,
        l: 24,
        ml: 20,
        m: 16,
        sm: 12,
        s: 8,
        xs: 4,
        xxs: 2,
    }
}
