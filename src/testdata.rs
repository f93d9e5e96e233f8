//! Shared fixtures for binary-level tests.

fn flat(v: f64) -> String {
    let items = vec![v.to_string(); 366].join(", ");
    format!("[{items}]")
}

/// A complete basin file with a 91-day period, label `rio_seco`.
pub fn basin_text() -> String {
    let dry = vec!["[3.08, 0.24, 2.0]"; 12].join(", ");
    let wet = vec!["[4.33, 0.33, 1.0]"; 12].join(", ");
    let depth = vec!["[1.44, 0.61, 0.255, 6.01]"; 12].join(", ");
    let caps = vec!["38.0"; 12].join(", ");
    format!(
        r#"
[basin]
label = "rio_seco"
latitude_deg = 30.018

[period]
start = "2024-01-01"
end = "2024-03-31"

[spells]
dry = [{dry}]
wet = [{wet}]

[depth]
params = [{depth}]
monthly_max_mm = [{caps}]

[temperature]
a = [[0.73052685, 0.0], [0.26161958, 0.68176198]]
b = [[0.5445484, 0.21648021], [-0.02866402, 0.69770329]]
m0 = [[0.9999999943590598, 0.5214190449020624], [0.5214190449020624, 1.000000018944366]]
m1 = [[0.657425301266633, 0.5004181207320266], [0.3351317632585187, 0.6827573372860929]]
wet_tmax_add = 5.7947
dry_tmax_add = 5.99872
wet_tmin_add = 2.14164
dry_tmin_add = 2.12933

[climatology.wet]
tmax_mean = {wet_tmax}
tmin_mean = {wet_tmin}
tave_mean = {wet_tave}
tmax_sd = {sd}
tmin_sd = {sd}
tave_sd = {sd}

[climatology.dry]
tmax_mean = {dry_tmax}
tmin_mean = {dry_tmin}
tave_mean = {dry_tave}
tmax_sd = {sd}
tmin_sd = {sd}
tave_sd = {sd}
"#,
        wet_tmax = flat(18.0),
        wet_tmin = flat(8.0),
        wet_tave = flat(13.0),
        dry_tmax = flat(24.0),
        dry_tmin = flat(10.0),
        dry_tave = flat(17.0),
        sd = flat(2.5),
    )
}
