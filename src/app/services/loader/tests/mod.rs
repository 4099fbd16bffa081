//! Tests for data sources and reload coordination

use std::io::Write;
use tempfile::NamedTempFile;


pub fn create_sample_csv() -> String {
    "id,nombre,lat,lng,consejos,distancia,ruta,link\n\
     1,Tapalpa,19.95,-103.77,Zona segura,2h,http://r,http://i\n\
     2,,20.0,-103.0,x,y,z,w\n\
     3,Mazamitla,19.91,-103.03,\"Cuidado, lleve agua\",1.5h,http://r2,http://i2\n"
        .to_string()
}

/// Write content to a temporary file
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
