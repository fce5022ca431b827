use std::f64::consts::TAU;

/// Degrees for orbits holding 16 positions. Quarter turns are split at
/// 30/45/60 rather than evenly.
const SIXTEEN_SLOT_DEGREES: [f64; 16] = [
    0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0, 210.0, 225.0, 240.0, 270.0, 300.0,
    315.0, 330.0,
];

/// Degrees for orbits holding 40 positions: twelve 30 degree sectors with
/// slots at +0/+10/+20, and an extra +15 slot in every third sector starting
/// from the second.
const FORTY_SLOT_DEGREES: [f64; 40] = [
    0.0, 10.0, 20.0, //
    30.0, 40.0, 45.0, 50.0, //
    60.0, 70.0, 80.0, //
    90.0, 100.0, 110.0, //
    120.0, 130.0, 135.0, 140.0, //
    150.0, 160.0, 170.0, //
    180.0, 190.0, 200.0, //
    210.0, 220.0, 225.0, 230.0, //
    240.0, 250.0, 260.0, //
    270.0, 280.0, 290.0, //
    300.0, 310.0, 315.0, 320.0, //
    330.0, 340.0, 350.0,
];

fn special_table(skills_per_orbit: u32) -> Option<&'static [f64]> {
    match skills_per_orbit {
        16 => Some(&SIXTEEN_SLOT_DEGREES),
        40 => Some(&FORTY_SLOT_DEGREES),
        _ => None,
    }
}

/// Angle in radians, clockwise from straight up, of slot `orbit_index` on an
/// orbit that conventionally holds `skills_per_orbit` nodes.
pub fn orbit_angle(orbit_index: u32, skills_per_orbit: u32) -> f64 {
    if let Some(degrees) = special_table(skills_per_orbit)
        .and_then(|table| table.get(orbit_index as usize))
    {
        return degrees.to_radians();
    }
    uniform_angle(orbit_index, skills_per_orbit)
}

fn uniform_angle(orbit_index: u32, skills_per_orbit: u32) -> f64 {
    if skills_per_orbit == 0 {
        return 0.0;
    }
    TAU * orbit_index as f64 / skills_per_orbit as f64
}
