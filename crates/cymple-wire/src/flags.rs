//! Category flags for the Cymple wire protocol

use cymple_core::Category;

/// Category flags (u32, network byte order on the wire)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryFlags(pub u32);

impl CategoryFlags {
    pub const NONE: CategoryFlags = CategoryFlags(0);

    // Flag bits, sender-defined
    pub const EXPRESSION: u32 = 0x01;
    pub const EYE: u32 = 0x02;

    #[inline]
    pub fn new(bits: u32) -> Self {
        CategoryFlags(bits)
    }

    #[inline]
    pub fn has_expression(self) -> bool {
        self.0 & Self::EXPRESSION != 0
    }

    #[inline]
    pub fn has_eye(self) -> bool {
        self.0 & Self::EYE != 0
    }

    /// Whether the given category is present in this update
    #[inline]
    pub fn contains(self, category: Category) -> bool {
        match category {
            Category::Eye => self.has_eye(),
            Category::Expression => self.has_expression(),
        }
    }

    #[inline]
    pub fn set_expression(&mut self, value: bool) {
        if value {
            self.0 |= Self::EXPRESSION;
        } else {
            self.0 &= !Self::EXPRESSION;
        }
    }

    #[inline]
    pub fn set_eye(&mut self, value: bool) {
        if value {
            self.0 |= Self::EYE;
        } else {
            self.0 &= !Self::EYE;
        }
    }
}

impl From<u32> for CategoryFlags {
    fn from(bits: u32) -> Self {
        CategoryFlags(bits)
    }
}

impl From<CategoryFlags> for u32 {
    fn from(flags: CategoryFlags) -> Self {
        flags.0
    }
}
