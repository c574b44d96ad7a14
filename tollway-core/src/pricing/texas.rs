//! Built-in facility definitions for Texas metro areas.
//!
//! Rates are base dollars per mile for tagged vehicles. Order matters: the
//! first facility with a matching pattern claims the road name.

use super::{PricingTableError, Region, TollFacility};

struct Definition {
    id: &'static str,
    description: &'static str,
    region: Region,
    patterns: &'static [&'static str],
    rate_per_mile: f64,
    /// `(peak_multiplier, congestion_sensitive)` for dynamic facilities.
    dynamic: Option<(f64, bool)>,
}

// Short acronym patterns (`bw`, `fb`, `dnt`, `pgbt`, `srt`, `nte`) keep their `\b`
// anchors so they cannot match inside ordinary words such as "center".
const DEFINITIONS: &[Definition] = &[
    // Austin
    Definition {
        id: "183_toll",
        description: "183 Express/Toll (Austin)",
        region: Region::Austin,
        patterns: &[
            r"183.*toll",
            r"183.*express",
            r"us.*183.*toll",
            r"highway.*183.*toll",
        ],
        rate_per_mile: 0.65,
        dynamic: Some((2.0, true)),
    },
    Definition {
        id: "sh45_toll",
        description: "SH-45 Toll (Austin)",
        region: Region::Austin,
        patterns: &[r"sh.*45", r"state.*highway.*45", r"45.*toll", r"highway.*45"],
        rate_per_mile: 0.47,
        dynamic: None,
    },
    Definition {
        id: "mopac_express",
        description: "MoPac Express (Austin)",
        region: Region::Austin,
        patterns: &[
            r"mopac.*express",
            r"loop.*1.*express",
            r"mo[-\s]?pac.*toll",
            r"1.*loop.*express",
        ],
        rate_per_mile: 0.95,
        dynamic: Some((2.5, true)),
    },
    Definition {
        id: "sh130_toll",
        description: "SH-130 Toll (Austin/San Antonio)",
        region: Region::Austin,
        patterns: &[
            r"sh.*130",
            r"state.*highway.*130",
            r"130.*toll",
            r"highway.*130",
        ],
        rate_per_mile: 0.17,
        dynamic: None,
    },
    Definition {
        id: "tx71_toll",
        description: "TX-71 Toll (Austin)",
        region: Region::Austin,
        patterns: &[r"tx.*71.*toll", r"highway.*71.*toll", r"71.*express"],
        rate_per_mile: 0.50,
        dynamic: None,
    },
    Definition {
        id: "manor_expressway",
        description: "Manor Expressway (Austin)",
        region: Region::Austin,
        patterns: &[r"manor.*expressway", r"manor.*toll", r"us.*290.*toll"],
        rate_per_mile: 0.42,
        dynamic: None,
    },
    // Houston
    Definition {
        id: "sam_houston_tollway",
        description: "Sam Houston Tollway / Beltway 8 (Houston)",
        region: Region::Houston,
        patterns: &[
            r"sam.*houston.*tollway",
            r"beltway.*8",
            r"belt.*way.*8",
            r"\bbw.*8",
        ],
        rate_per_mile: 0.50,
        dynamic: Some((1.8, true)),
    },
    Definition {
        id: "hardy_toll",
        description: "Hardy Toll Road (Houston)",
        region: Region::Houston,
        patterns: &[r"hardy.*toll", r"hardy.*road", r"sam.*houston.*parkway"],
        rate_per_mile: 0.55,
        dynamic: None,
    },
    Definition {
        id: "westpark_tollway",
        description: "Westpark Tollway (Houston)",
        region: Region::Houston,
        patterns: &[r"westpark.*toll", r"west.*park.*toll"],
        rate_per_mile: 0.60,
        dynamic: None,
    },
    Definition {
        id: "fort_bend_tollway",
        description: "Fort Bend Tollway (Houston)",
        region: Region::Houston,
        patterns: &[r"fort.*bend.*toll", r"\bfb.*toll"],
        rate_per_mile: 0.45,
        dynamic: None,
    },
    Definition {
        id: "grand_parkway",
        description: "Grand Parkway SH-99 (Houston)",
        region: Region::Houston,
        patterns: &[
            r"grand.*parkway",
            r"sh.*99",
            r"99.*toll",
            r"state.*highway.*99",
        ],
        rate_per_mile: 0.40,
        dynamic: None,
    },
    Definition {
        id: "tomball_tollway",
        description: "Tomball Tollway (Houston)",
        region: Region::Houston,
        patterns: &[r"tomball.*toll", r"249.*toll"],
        rate_per_mile: 0.48,
        dynamic: None,
    },
    // Dallas-Fort Worth
    Definition {
        id: "dallas_north_tollway",
        description: "Dallas North Tollway (DFW)",
        region: Region::DallasFortWorth,
        patterns: &[
            r"dallas.*north.*tollway",
            r"\bdnt\b",
            r"north.*tollway.*dallas",
        ],
        rate_per_mile: 0.70,
        dynamic: Some((1.9, true)),
    },
    Definition {
        id: "pgbt",
        description: "President George Bush Turnpike (DFW)",
        region: Region::DallasFortWorth,
        patterns: &[
            r"george.*bush.*turnpike",
            r"\bpgbt\b",
            r"bush.*tollway",
            r"president.*bush",
        ],
        rate_per_mile: 0.65,
        dynamic: None,
    },
    Definition {
        id: "sam_rayburn_tollway",
        description: "Sam Rayburn Tollway (DFW)",
        region: Region::DallasFortWorth,
        patterns: &[r"sam.*rayburn.*toll", r"\bsrt\b", r"rayburn.*toll"],
        rate_per_mile: 0.60,
        dynamic: None,
    },
    Definition {
        id: "lbj_express",
        description: "LBJ Express (DFW)",
        region: Region::DallasFortWorth,
        patterns: &[
            r"lbj.*express",
            r"lbj.*toll",
            r"635.*express",
            r"i[-\s]?635.*express",
        ],
        rate_per_mile: 0.85,
        dynamic: Some((2.2, true)),
    },
    Definition {
        id: "ntt_121",
        description: "SH-121 Tollway (DFW)",
        region: Region::DallasFortWorth,
        patterns: &[r"121.*toll", r"tollway.*121", r"highway.*121.*toll"],
        rate_per_mile: 0.55,
        dynamic: None,
    },
    Definition {
        id: "chisholm_trail",
        description: "Chisholm Trail Parkway (Fort Worth)",
        region: Region::DallasFortWorth,
        patterns: &[r"chisholm.*trail", r"chisholm.*parkway"],
        rate_per_mile: 0.58,
        dynamic: None,
    },
    Definition {
        id: "north_tarrant_express",
        description: "North Tarrant Express (Fort Worth)",
        region: Region::DallasFortWorth,
        patterns: &[r"north.*tarrant.*express", r"\bnte\b", r"820.*express"],
        rate_per_mile: 0.75,
        dynamic: Some((2.0, true)),
    },
    // San Antonio
    Definition {
        id: "loop_1604_toll",
        description: "Loop 1604 Toll (San Antonio)",
        region: Region::SanAntonio,
        patterns: &[r"1604.*toll", r"loop.*1604.*toll"],
        rate_per_mile: 0.48,
        dynamic: None,
    },
    Definition {
        id: "sh_130_south",
        description: "SH-130 South Extension (San Antonio)",
        region: Region::SanAntonio,
        patterns: &[r"sh.*130.*south", r"130.*toll.*south"],
        rate_per_mile: 0.17,
        dynamic: None,
    },
];

pub(super) fn facilities() -> Result<Vec<TollFacility>, PricingTableError> {
    DEFINITIONS.iter().map(build).collect()
}

fn build(definition: &Definition) -> Result<TollFacility, PricingTableError> {
    let facility = TollFacility::new(
        definition.id,
        definition.description,
        definition.region,
        definition.rate_per_mile,
        definition.patterns,
    )?;
    match definition.dynamic {
        Some((peak, congestion_sensitive)) => {
            facility.with_dynamic_pricing(peak, congestion_sensitive)
        }
        None => Ok(facility),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_definition_compiles() {
        let built = facilities().expect("definitions compile");
        assert_eq!(built.len(), DEFINITIONS.len());
    }

    #[test]
    fn dynamic_facilities_keep_table_order() {
        let built = facilities().expect("definitions compile");
        let dynamic: Vec<_> = built
            .iter()
            .filter(|facility| facility.is_dynamic())
            .map(TollFacility::id)
            .collect();
        assert_eq!(
            dynamic,
            [
                "183_toll",
                "mopac_express",
                "sam_houston_tollway",
                "dallas_north_tollway",
                "lbj_express",
                "north_tarrant_express"
            ]
        );
    }
}
