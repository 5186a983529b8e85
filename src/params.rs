use std::fmt::Display;

use itertools::iproduct;

pub const VALID_ADDR_WIDTHS: [u32; 2] = [32, 64];
pub const VALID_DATA_WIDTHS: [u32; 8] = [8, 16, 32, 64, 128, 256, 512, 1024];
pub const VALID_LEN_WIDTHS: [u32; 2] = [4, 8];
pub const VALID_ID_WIDTHS: [u32; 2] = [4, 5];

/// One selection of bus widths, used to produce exactly one parameter package.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Combination {
    pub addr_width: u32,
    pub data_width: u32,
    pub len_width: u32,
    pub id_width: u32,
}

impl Combination {
    pub fn new(addr_width: u32, data_width: u32, len_width: u32, id_width: u32) -> Self {
        Self {
            addr_width,
            data_width,
            len_width,
            id_width,
        }
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "addr={} data={} len={} id={}",
            self.addr_width, self.data_width, self.len_width, self.id_width
        )
    }
}

/// The ordered sets of legal values for each bus-width parameter.
///
/// [`WidthDomains::default`] yields the fixed production domains. Enumeration
/// order is address (outermost), data, length, then id (innermost).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WidthDomains {
    pub addr_widths: Vec<u32>,
    pub data_widths: Vec<u32>,
    pub len_widths: Vec<u32>,
    pub id_widths: Vec<u32>,
}

impl Default for WidthDomains {
    fn default() -> Self {
        Self {
            addr_widths: VALID_ADDR_WIDTHS.to_vec(),
            data_widths: VALID_DATA_WIDTHS.to_vec(),
            len_widths: VALID_LEN_WIDTHS.to_vec(),
            id_widths: VALID_ID_WIDTHS.to_vec(),
        }
    }
}

impl WidthDomains {
    pub fn combinations(&self) -> impl Iterator<Item = Combination> + '_ {
        iproduct!(
            self.addr_widths.iter(),
            self.data_widths.iter(),
            self.len_widths.iter(),
            self.id_widths.iter()
        )
        .map(|(&addr, &data, &len, &id)| Combination::new(addr, data, len, id))
    }

    /// Number of combinations in the Cartesian product.
    pub fn len(&self) -> usize {
        self.addr_widths.len()
            * self.data_widths.len()
            * self.len_widths.len()
            * self.id_widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
