use strum_macros::{EnumIter, EnumString, IntoStaticStr};

// source: argument names from the riscv-opcodes encoding descriptions, display
// notation as rendered in the ISA manual instruction tables

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
pub enum Field {
    #[strum(serialize = "imm12")]
    Imm12,
    #[strum(serialize = "rs1")]
    Rs1,
    #[strum(serialize = "rs2")]
    Rs2,
    #[strum(serialize = "rd")]
    Rd,
    #[strum(serialize = "imm20")]
    Imm20,
    #[strum(serialize = "bimm12hi")]
    Bimm12Hi,
    #[strum(serialize = "bimm12lo")]
    Bimm12Lo,
    #[strum(serialize = "imm12hi")]
    Imm12Hi,
    #[strum(serialize = "imm12lo")]
    Imm12Lo,
    #[strum(serialize = "jimm20")]
    Jimm20,
    #[strum(serialize = "zimm")]
    Zimm,
    #[strum(serialize = "shamtw")]
    Shamtw,
    #[strum(serialize = "shamtd")]
    Shamtd,
    #[strum(serialize = "shamtq")]
    Shamtq,
    #[strum(serialize = "rd_p")]
    RdP,
    #[strum(serialize = "rs1_p")]
    Rs1P,
    #[strum(serialize = "rs2_p")]
    Rs2P,
    #[strum(serialize = "rd_rs1_n0")]
    RdRs1N0,
    #[strum(serialize = "rd_rs1_p")]
    RdRs1P,
    #[strum(serialize = "c_rs2")]
    CRs2,
    #[strum(serialize = "c_rs2_n0")]
    CRs2N0,
    #[strum(serialize = "rd_n0")]
    RdN0,
    #[strum(serialize = "rs1_n0")]
    Rs1N0,
    #[strum(serialize = "c_rs1_n0")]
    CRs1N0,
    #[strum(serialize = "rd_rs1")]
    RdRs1,
    #[strum(serialize = "zimm6hi")]
    Zimm6Hi,
    #[strum(serialize = "zimm6lo")]
    Zimm6Lo,
    #[strum(serialize = "c_nzuimm10")]
    CNzuimm10,
    #[strum(serialize = "c_uimm7lo")]
    CUimm7Lo,
    #[strum(serialize = "c_uimm7hi")]
    CUimm7Hi,
    #[strum(serialize = "c_uimm8lo")]
    CUimm8Lo,
    #[strum(serialize = "c_uimm8hi")]
    CUimm8Hi,
    #[strum(serialize = "c_uimm9lo")]
    CUimm9Lo,
    #[strum(serialize = "c_uimm9hi")]
    CUimm9Hi,
    #[strum(serialize = "c_nzimm6lo")]
    CNzimm6Lo,
    #[strum(serialize = "c_nzimm6hi")]
    CNzimm6Hi,
    #[strum(serialize = "c_imm6lo")]
    CImm6Lo,
    #[strum(serialize = "c_imm6hi")]
    CImm6Hi,
    #[strum(serialize = "c_nzimm10hi")]
    CNzimm10Hi,
    #[strum(serialize = "c_nzimm10lo")]
    CNzimm10Lo,
    #[strum(serialize = "c_nzimm18hi")]
    CNzimm18Hi,
    #[strum(serialize = "c_nzimm18lo")]
    CNzimm18Lo,
    #[strum(serialize = "c_imm12")]
    CImm12,
    #[strum(serialize = "c_bimm9lo")]
    CBimm9Lo,
    #[strum(serialize = "c_bimm9hi")]
    CBimm9Hi,
    #[strum(serialize = "c_nzuimm5")]
    CNzuimm5,
    #[strum(serialize = "c_nzuimm6lo")]
    CNzuimm6Lo,
    #[strum(serialize = "c_nzuimm6hi")]
    CNzuimm6Hi,
    #[strum(serialize = "c_uimm8splo")]
    CUimm8SpLo,
    #[strum(serialize = "c_uimm8sphi")]
    CUimm8SpHi,
    #[strum(serialize = "c_uimm8sp_s")]
    CUimm8SpS,
    #[strum(serialize = "c_uimm10splo")]
    CUimm10SpLo,
    #[strum(serialize = "c_uimm10sphi")]
    CUimm10SpHi,
    #[strum(serialize = "c_uimm9splo")]
    CUimm9SpLo,
    #[strum(serialize = "c_uimm9sphi")]
    CUimm9SpHi,
    #[strum(serialize = "c_uimm10sp_s")]
    CUimm10SpS,
    #[strum(serialize = "c_uimm9sp_s")]
    CUimm9SpS,
}

/// Left shift applied to a raw field value to recover its contribution to the
/// full immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// The shift depends on the instruction, so no single amount holds for
    /// the field. `imm20` shifts by 1 under `jal` and by 20 under
    /// `lui`/`auipc`.
    Ambiguous,
    Left(u8),
}

impl Shift {
    /// Collapses to the generator convention: `0` marks [`Shift::Ambiguous`],
    /// every other value is a literal bit count.
    pub fn amount(self) -> u8 {
        match self {
            Shift::Ambiguous => 0,
            Shift::Left(n) => n,
        }
    }
}

impl Field {
    /// The raw spelling of this field in encoding descriptions.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The bit-range or register-role notation shown in documentation tables.
    ///
    /// Bit ranges name logical bits of the reconstructed value and are
    /// written most-significant group first.
    pub fn display_name(self) -> &'static str {
        match self {
            Field::Imm12 => "imm[11:0]",
            Field::Rs1 => "rs1",
            Field::Rs2 => "rs2",
            Field::Rd => "rd",
            Field::Imm20 => "imm[31:12]",
            Field::Bimm12Hi => "imm[12|10:5]",
            Field::Bimm12Lo => "imm[4:1|11]",
            Field::Imm12Hi => "imm[11:5]",
            Field::Imm12Lo => "imm[4:0]",
            Field::Jimm20 => "imm[20|10:1|11|19:12]",
            Field::Zimm => "uimm",
            Field::Shamtw => "shamt",
            Field::Shamtd => "shamt",
            Field::Shamtq => "shamt",
            Field::RdP => "rd",
            Field::Rs1P => "rs1",
            Field::Rs2P => "rs2",
            Field::RdRs1N0 => "rd/rs!=0",
            Field::RdRs1P => "rs1/rs2",
            Field::CRs2 => "rs2",
            Field::CRs2N0 => "rs2!=0",
            Field::RdN0 => "rd!=0",
            Field::Rs1N0 => "rs1!=0",
            Field::CRs1N0 => "rs1!=0",
            Field::RdRs1 => "rd/rs1",
            Field::Zimm6Hi => "uimm[5]",
            Field::Zimm6Lo => "uimm[4:0]",
            Field::CNzuimm10 => "nzuimm[5:4|9:6|2|3]",
            Field::CUimm7Lo => "uimm[2|6]",
            Field::CUimm7Hi => "uimm[5:3]",
            Field::CUimm8Lo => "uimm[7:6]",
            Field::CUimm8Hi => "uimm[5:3]",
            Field::CUimm9Lo => "uimm[7:6]",
            Field::CUimm9Hi => "uimm[5:4|8]",
            Field::CNzimm6Lo => "nzimm[4:0]",
            Field::CNzimm6Hi => "nzimm[5]",
            Field::CImm6Lo => "imm[4:0]",
            Field::CImm6Hi => "imm[5]",
            Field::CNzimm10Hi => "nzimm[9]",
            Field::CNzimm10Lo => "nzimm[4|6|8:7|5]",
            Field::CNzimm18Hi => "nzimm[17]",
            Field::CNzimm18Lo => "nzimm[16:12]",
            Field::CImm12 => "imm[11|4|9:8|10|6|7|3:1|5]",
            Field::CBimm9Lo => "imm[7:6|2:1|5]",
            Field::CBimm9Hi => "imm[8|4:3]",
            Field::CNzuimm5 => "nzuimm[4:0]",
            Field::CNzuimm6Lo => "nzuimm[4:0]",
            Field::CNzuimm6Hi => "nzuimm[5]",
            Field::CUimm8SpLo => "uimm[4:2|7:6]",
            Field::CUimm8SpHi => "uimm[5]",
            Field::CUimm8SpS => "uimm[5:2|7:6]",
            Field::CUimm10SpLo => "uimm[4|9:6]",
            Field::CUimm10SpHi => "uimm[5]",
            Field::CUimm9SpLo => "uimm[4:3|8:6]",
            Field::CUimm9SpHi => "uimm[5]",
            Field::CUimm10SpS => "uimm[5:4|9:6]",
            Field::CUimm9SpS => "uimm[5:3|8:6]",
        }
    }

    /// The configured left shift for this field, if one is recorded. Most
    /// fields have no entry.
    pub fn shift(self) -> Option<Shift> {
        match self {
            Field::Imm20 => Some(Shift::Ambiguous),
            Field::Bimm12Hi => Some(Shift::Left(1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn is_index(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
    }

    fn is_range(r: &str) -> bool {
        match r.split_once(':') {
            Some((hi, lo)) => is_index(hi) && is_index(lo),
            None => is_index(r),
        }
    }

    fn is_range_list(s: &str) -> bool {
        let name = match s.split_once('[') {
            Some((name, rest)) => match rest.strip_suffix(']') {
                Some(inner) if !inner.is_empty() => {
                    if !inner.split('|').all(is_range) {
                        return false;
                    }
                    name
                }
                _ => return false,
            },
            None => s,
        };
        !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase())
    }

    fn is_role(s: &str) -> bool {
        let s = s.strip_suffix("!=0").unwrap_or(s);
        s.split('/')
            .all(|r| !r.is_empty() && r.chars().all(|c| c.is_ascii_alphanumeric()))
    }

    #[test]
    fn display_names_well_formed() {
        for f in Field::iter() {
            let d = f.display_name();
            assert!(
                is_range_list(d) || is_role(d),
                "malformed display name {:?} for {:?}",
                d,
                f
            );
        }
    }

    #[test]
    fn name_round_trips() {
        for f in Field::iter() {
            assert_eq!(Field::from_str(f.name()), Ok(f));
        }
    }

    #[test]
    fn entry_count() {
        assert_eq!(Field::iter().count(), 57);
    }

    #[test]
    fn shift_entries() {
        assert_eq!(Field::Imm20.shift(), Some(Shift::Ambiguous));
        assert_eq!(Field::Bimm12Hi.shift(), Some(Shift::Left(1)));
        assert_eq!(Field::Rs1.shift(), None);
        assert_eq!(Field::Jimm20.shift(), None);
    }

    #[test]
    fn shift_amounts() {
        assert_eq!(Shift::Ambiguous.amount(), 0);
        assert_eq!(Shift::Left(1).amount(), 1);
        assert_eq!(Shift::Left(20).amount(), 20);
    }
}
