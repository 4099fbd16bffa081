//! Test utilities for the tourism CSV parser
//!
//! Shared fixtures used across the parser test modules.

mod stats_tests;
mod tokenizer_tests;

/// Header line of the spreadsheet export
pub const HEADER: &str = "id,nombre,lat,lng,consejos,distancia,ruta,link";

/// Sample export with one valid row, one unnamed row and one quoted row
pub fn create_sample_csv() -> String {
    r#"id,nombre,lat,lng,consejos,distancia,ruta,link
1,Tapalpa,19.95,-103.77,Zona segura,2h,http://r,http://i
2,,20.0,-103.0,x,y,z,w
3,Mazamitla,19.91,-103.03,"Cuidado, lleve agua",1.5h,http://r2,http://i2
"#
    .to_string()
}

/// Export mixing every kind of malformed row between two good ones
pub fn create_mixed_quality_csv() -> String {
    format!(
        "{}\n\
         1,Tequila,20.88,-103.84,Lleve sombrero,1h,http://r,http://i\n\
         2,Ajijic,20.30\n\
         3,   ,20.30,-103.26,x,y,z,w\n\
         4,Talpa,norte,-104.82,x,y,z,w\n\
         5,Mascota,20.52,,x,y,z,w\n\
         6,Lagos de Moreno,21.35,-101.93,Centro histórico,3h,http://r6,http://i6\n",
        HEADER
    )
}

/// Build a row of field strings
pub fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
