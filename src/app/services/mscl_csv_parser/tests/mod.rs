//! Unit tests for the MSCL CSV parser
//!
//! Organized by component, with shared file fixtures modeled on real MSCL
//! exports (title row, metadata row, separator row, floating data header).


use std::path::{Path, PathBuf};

/// Export with the header at raw-row offset 3 (the common layout)
pub const STANDARD_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v7.9,,,,,,,,,,,
GC-01 Example Bore,Geological Survey Core Store,Diamond drill core,2019-03-11,2019-03-15,534230.0,6985012.0,412.5,150.2,117.5210,-28.9031,BH1234
,,,,,,,,,,,
SECT NUM,DEPTH,DIAMETER,P-WAVE AMP.,P-WAVE VEL.,DENSITY,MAG. SUS,IMPEDANCE,N. GAMMA,RESISTIVITY
1,0.025,63.4,92.1,1523.5,1.921,15.2,2925.4,12.4,8.52
1,0.050,63.4,91.8,1519.2,1.934,15.6,2937.8,12.1,8.47
1,0.075,63.4,,1515.0,1.940,16.1,2940.2,11.9,8.44
";

/// Export from a newer instrument version: a units row pushes the header to
/// offset 4, the long-form column labels are used, and the metadata row has
/// no external borehole identifier.
pub const OFFSET4_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v8.1,,,,,,,,,,,
GC-02 Deep Bore,Geological Survey Core Store,Diamond drill core,2020-06-01,2020-06-09,541020.0,6990144.0,388.0,201.7,118.0042,-29.1277,
,,,,,,,,,,,
,m,mm,,m/s,gm/cc,SI,,cps,ohm-m
SECT NUM,DEPTH,DIAMETER,P-WAVE AMPLITUDE,P-WAVE VELOCITY,DENSITY,MAG. SUSC.,IMPEDANCE,NAT. GAMMA,RESISTIVITY
1,0.020,61.0,88.3,1490.7,1.899,14.8,2830.1,10.2,7.91
1,0.040,61.0,88.9,1492.3,1.905,14.9,2836.6,10.5,7.95
";

/// Export where only the density sensor produced data
pub const DENSITY_ONLY_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v7.9,,,,,,,,,,,
GC-03 Shallow Bore,Geological Survey Core Store,Diamond drill core,2018-09-20,2018-09-21,529844.0,6979310.0,430.1,42.6,117.3391,-28.7540,BH0099
,,,,,,,,,,,
SECT NUM,DEPTH,DIAMETER,P-WAVE AMP.,P-WAVE VEL.,DENSITY,MAG. SUS,IMPEDANCE,N. GAMMA,RESISTIVITY
1,0.025,,,,1.921,,,,
1,0.050,,,,1.930,,,,
";

/// Export exposing both aliases of the p-wave amplitude column
pub const BOTH_ALIASES_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v7.9,,,,,,,,,,,
GC-04 Twin Bore,Geological Survey Core Store,Diamond drill core,2021-02-02,2021-02-04,536500.0,6987200.0,401.3,98.4,117.6105,-28.9544,BH2001
,,,,,,,,,,,
SECT NUM,DEPTH,DIAMETER,P-WAVE AMP.,P-WAVE AMPLITUDE,P-WAVE VEL.,DENSITY,MAG. SUS,IMPEDANCE,N. GAMMA,RESISTIVITY
1,0.025,63.4,92.1,55.5,1523.5,1.921,15.2,2925.4,12.4,8.52
";

/// Export with no resistivity column under either alias
pub const MISSING_COLUMN_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v7.9,,,,,,,,,,,
GC-05 Broken Bore,Geological Survey Core Store,Diamond drill core,2017-05-15,2017-05-18,531222.0,6981005.0,425.0,77.0,117.4098,-28.8122,BH0412
,,,,,,,,,,,
SECT NUM,DEPTH,DIAMETER,P-WAVE AMP.,P-WAVE VEL.,DENSITY,MAG. SUS,IMPEDANCE,N. GAMMA
1,0.025,63.4,92.1,1523.5,1.921,15.2,2925.4,12.4
";

/// File with no usable header at either probed offset
pub const HEADERLESS_EXPORT: &str = "\
MSCL-S Multi-Sensor Core Logger v7.9,,,,,,,,,,,
GC-06 Lost Bore,Geological Survey Core Store,Diamond drill core,2016-01-12,2016-01-14,530000.0,6980000.0,418.9,63.2,117.3800,-28.7901,BH0007
,,,,,,,,,,,
,,,,,,,,,,,
,,,,,,,,,,,
,,,,,,,,,,,
";

/// Write a fixture export into a directory and return its path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
