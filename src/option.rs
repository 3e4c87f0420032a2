use crate::cipher_desc::CipherDesc;

/// One of the 256 candidates for the byte currently under attack.
///
/// `false_pos_check`, when present, is a second descriptor that must also be
/// judged valid by the oracle before `index` can be trusted: it guards
/// against a last-byte candidate that happens to produce valid padding by
/// accident (e.g. a true plaintext ending in `.. 0x02 0x02` can be mistaken
/// for one ending in `.. 0x01`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecOption {
    pub index: u8,
    pub option: CipherDesc,
    pub false_pos_check: Option<CipherDesc>,
}

impl DecOption {
    pub fn new(index: u8, option: CipherDesc, false_pos_check: Option<CipherDesc>) -> Self {
        Self {
            index,
            option,
            false_pos_check,
        }
    }
}

/// Checks an option against an oracle `f`, ANDing in the false-positive
/// probe's verdict when one is present. An absent probe counts as true.
pub fn check_opt(mut f: impl FnMut(&CipherDesc) -> bool, opt: &DecOption) -> bool {
    f(&opt.option)
        && opt
            .false_pos_check
            .as_ref()
            .map_or(true, |probe| f(probe))
}

/// Measures an option with `f` (expected to return a duration in some
/// unsigned unit, e.g. nanoseconds), returning `(primary, probe, index)`.
/// The tuple's natural lexicographic ordering supports ranking candidates by
/// measured cost.
pub fn measure_opt(
    mut f: impl FnMut(&CipherDesc) -> u128,
    opt: &DecOption,
) -> (u128, Option<u128>, u8) {
    let primary = f(&opt.option);
    let probe = opt.false_pos_check.as_ref().map(|d| f(d));
    (primary, probe, opt.index)
}
