use phf::{Map, phf_map};

static ELEMENT_SYMBOLS: Map<u8, &'static str> = phf_map! {
    1u8 => "H", 2u8 => "He",
    3u8 => "Li", 4u8 => "Be", 5u8 => "B", 6u8 => "C", 7u8 => "N", 8u8 => "O", 9u8 => "F", 10u8 => "Ne",
    11u8 => "Na", 12u8 => "Mg", 13u8 => "Al", 14u8 => "Si", 15u8 => "P", 16u8 => "S", 17u8 => "Cl", 18u8 => "Ar",
    19u8 => "K", 20u8 => "Ca", 21u8 => "Sc", 22u8 => "Ti", 23u8 => "V", 24u8 => "Cr", 25u8 => "Mn", 26u8 => "Fe",
    27u8 => "Co", 28u8 => "Ni", 29u8 => "Cu", 30u8 => "Zn", 31u8 => "Ga", 32u8 => "Ge", 33u8 => "As", 34u8 => "Se",
    35u8 => "Br", 36u8 => "Kr",
    37u8 => "Rb", 38u8 => "Sr", 39u8 => "Y", 40u8 => "Zr", 41u8 => "Nb", 42u8 => "Mo", 43u8 => "Tc", 44u8 => "Ru",
    45u8 => "Rh", 46u8 => "Pd", 47u8 => "Ag", 48u8 => "Cd", 49u8 => "In", 50u8 => "Sn", 51u8 => "Sb", 52u8 => "Te",
    53u8 => "I", 54u8 => "Xe",
    55u8 => "Cs", 56u8 => "Ba", 57u8 => "La", 58u8 => "Ce", 59u8 => "Pr", 60u8 => "Nd", 61u8 => "Pm", 62u8 => "Sm",
    63u8 => "Eu", 64u8 => "Gd", 65u8 => "Tb", 66u8 => "Dy", 67u8 => "Ho", 68u8 => "Er", 69u8 => "Tm", 70u8 => "Yb",
    71u8 => "Lu", 72u8 => "Hf", 73u8 => "Ta", 74u8 => "W", 75u8 => "Re", 76u8 => "Os", 77u8 => "Ir", 78u8 => "Pt",
    79u8 => "Au", 80u8 => "Hg", 81u8 => "Tl", 82u8 => "Pb", 83u8 => "Bi", 84u8 => "Po", 85u8 => "At", 86u8 => "Rn",
};

/// Looks up the chemical symbol for an atomic number.
///
/// The table covers hydrogen through radon, which spans every element with
/// standard all-electron or ECP basis sets in Gaussian. Anything outside that
/// range returns `None` and is treated as an input error by the writer.
pub fn element_symbol(atomic_number: u8) -> Option<&'static str> {
    ELEMENT_SYMBOLS.get(&atomic_number).copied()
}
