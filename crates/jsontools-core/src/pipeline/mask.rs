//! Capability bitmask: lets the fused traversal skip an
//! entire phase at every node with one `u8` test instead of scanning the
//! descriptor list per node.

use super::descriptor::Descriptor;

const REPLACE_KEYS: u8 = 1 << 0;
const REMOVE_NULLS: u8 = 1 << 1;
const REMOVE_EMPTY_STRINGS: u8 = 1 << 2;
const REPLACE_VALUES: u8 = 1 << 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityMask(u8);

impl CapabilityMask {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn add(&mut self, descriptor: &Descriptor) {
        self.0 |= match descriptor {
            Descriptor::ReplaceKeys { .. } => REPLACE_KEYS,
            Descriptor::RemoveNulls => REMOVE_NULLS,
            Descriptor::RemoveEmptyStrings => REMOVE_EMPTY_STRINGS,
            Descriptor::ReplaceValues { .. } => REPLACE_VALUES,
        };
    }

    pub fn has_replace_keys(self) -> bool {
        self.0 & REPLACE_KEYS != 0
    }

    pub fn has_removal(self) -> bool {
        self.0 & (REMOVE_NULLS | REMOVE_EMPTY_STRINGS) != 0
    }

    pub fn has_replace_values(self) -> bool {
        self.0 & REPLACE_VALUES != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex_adapter::CompiledPattern;

    #[test]
    fn empty_mask_reports_no_capabilities() {
        let mask = CapabilityMask::empty();
        assert!(!mask.has_replace_keys());
        assert!(!mask.has_removal());
        assert!(!mask.has_replace_values());
    }

    #[test]
    fn add_sets_only_the_relevant_bit() {
        let mut mask = CapabilityMask::empty();
        mask.add(&Descriptor::RemoveNulls);
        assert!(mask.has_removal());
        assert!(!mask.has_replace_keys());
        assert!(!mask.has_replace_values());
    }

    #[test]
    fn second_descriptor_of_same_kind_is_a_no_op_on_the_mask() {
        let mut mask = CapabilityMask::empty();
        let pattern = CompiledPattern::compile("a").unwrap();
        mask.add(&Descriptor::ReplaceKeys {
            pattern: pattern.clone(),
            replacement: "b".to_string(),
        });
        mask.add(&Descriptor::ReplaceKeys {
            pattern,
            replacement: "c".to_string(),
        });
        assert!(mask.has_replace_keys());
    }
}
