//! Attribute schemas for the output layers
//!
//! Column names follow the GeoServer borehole feature conventions consumed
//! downstream, so the mixed naming style is intentional and fixed.

use crate::constants::GEOMETRY_COLUMN;

/// One attribute column of a feature layer
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// Attribute columns of the `boreholes` layer
pub const BOREHOLE_FIELDS: &[FieldDef] = &[
    // Unique 1-based batch ordinal; datasets rows join against it
    FieldDef { name: "identifier", sql_type: "INTEGER" },
    // External borehole identifier; not unique
    FieldDef { name: "borehole_id", sql_type: "INTEGER" },
    FieldDef { name: "name", sql_type: "TEXT" },
    FieldDef { name: "datasetProperties", sql_type: "TEXT" },
    FieldDef { name: "boreholeMaterialCustodian", sql_type: "TEXT" },
    FieldDef { name: "description", sql_type: "TEXT" },
    FieldDef { name: "drillStartDate", sql_type: "TEXT" },
    FieldDef { name: "drillEndDate", sql_type: "TEXT" },
    FieldDef { name: "elevation_m", sql_type: "REAL" },
    FieldDef { name: "boreholeLength_m", sql_type: "REAL" },
    FieldDef { name: "long", sql_type: "REAL" },
    FieldDef { name: "lat", sql_type: "REAL" },
    FieldDef { name: "nvclCollection", sql_type: "TEXT" },
    FieldDef { name: "drillingMethod", sql_type: "TEXT" },
    FieldDef { name: "driller", sql_type: "TEXT" },
    FieldDef { name: "startPoint", sql_type: "TEXT" },
    FieldDef { name: "inclinationType", sql_type: "TEXT" },
    FieldDef { name: "elevation_srs", sql_type: "TEXT" },
    FieldDef { name: "operator", sql_type: "TEXT" },
    FieldDef { name: "datasetURL", sql_type: "TEXT" },
];

/// Attribute columns of the `datasets` layer
pub const DATASET_FIELDS: &[FieldDef] = &[
    // Joins against boreholes.identifier
    FieldDef { name: "borehole_header_id", sql_type: "INTEGER" },
    FieldDef { name: "depth", sql_type: "REAL" },
    FieldDef { name: "depth_point", sql_type: "TEXT" },
    FieldDef { name: "diameter", sql_type: "TEXT" },
    FieldDef { name: "p_wave_amplitude", sql_type: "TEXT" },
    FieldDef { name: "p_wave_velocity", sql_type: "TEXT" },
    FieldDef { name: "density", sql_type: "TEXT" },
    FieldDef { name: "magnetic_susceptibility", sql_type: "TEXT" },
    FieldDef { name: "impedance", sql_type: "TEXT" },
    FieldDef { name: "natural_gamma", sql_type: "TEXT" },
    FieldDef { name: "resistivity", sql_type: "TEXT" },
];

/// CREATE TABLE statement for a feature layer: `fid` primary key, geometry
/// column, then the attribute columns
pub fn create_table_sql(table: &str, fields: &[FieldDef]) -> String {
    let mut columns = vec![
        "\"fid\" INTEGER PRIMARY KEY AUTOINCREMENT".to_string(),
        format!("\"{}\" BLOB", GEOMETRY_COLUMN),
    ];
    columns.extend(
        fields
            .iter()
            .map(|field| format!("\"{}\" {}", field.name, field.sql_type)),
    );
    format!("CREATE TABLE \"{}\" ({})", table, columns.join(", "))
}

/// INSERT statement covering the geometry column plus every attribute column
pub fn insert_sql(table: &str, fields: &[FieldDef]) -> String {
    let mut names = vec![format!("\"{}\"", GEOMETRY_COLUMN)];
    names.extend(fields.iter().map(|field| format!("\"{}\"", field.name)));

    let placeholders = (1..=names.len())
        .map(|n| format!("?{}", n))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table,
        names.join(", "),
        placeholders
    )
}
