use std::fmt;

use squarepack::{Bin, PackItem, Size};

/// Where every sprite ended up, grouped by bin.
pub struct Layout {
    bins: Vec<LayoutBin>,
}

struct LayoutBin {
    size: Size,
    slices: Vec<Slice>,
}

struct Slice {
    name: String,
    min: (u32, u32),
    max: (u32, u32),
    rotated: bool,
}

impl Layout {
    pub fn new(bins: &[Bin], items: &[PackItem<String>]) -> Self {
        let bins = bins
            .iter()
            .map(|bin| LayoutBin {
                size: bin.size(),
                slices: bin
                    .items()
                    .iter()
                    .map(|&index| Slice::from(&items[index]))
                    .collect(),
            })
            .collect();

        Layout { bins }
    }
}

impl From<&PackItem<String>> for Slice {
    fn from(item: &PackItem<String>) -> Slice {
        let footprint = item.footprint();

        Slice {
            name: item.context().clone(),
            min: footprint.min(),
            max: footprint.max(),
            rotated: item.rotated(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bin) in self.bins.iter().enumerate() {
            writeln!(f, "Bin {}: {}", index, bin.size)?;

            for slice in &bin.slices {
                write!(
                    f,
                    "\t{}: ({}, {}) ({}, {})",
                    slice.name, slice.min.0, slice.min.1, slice.max.0, slice.max.1
                )?;

                if slice.rotated {
                    write!(f, " rotated")?;
                }

                writeln!(f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use squarepack::Packer;

    use super::*;

    #[test]
    fn lists_bins_and_slices() {
        let mut items = vec![
            PackItem::new((40, 20), "banner".to_owned()),
            PackItem::new((20, 40), "pillar".to_owned()),
            PackItem::new((40, 40), "tile".to_owned()),
        ];

        let output = Packer::new().max_side(40).pack(&mut items).unwrap();
        let layout = Layout::new(output.bins(), &items);

        assert_eq!(
            layout.to_string(),
            "Bin 0: 40x40\n\
             \ttile: (0, 0) (40, 40)\n\
             Bin 1: 40x40\n\
             \tbanner: (0, 0) (40, 20)\n\
             \tpillar: (0, 20) (40, 40) rotated\n"
        );
    }

    #[test]
    fn empty() {
        let layout = Layout::new(&[], &[]);

        assert_eq!(layout.to_string(), "");
    }
}
