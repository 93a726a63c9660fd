use aquafeed::config::tank_file::TankFile;
use std::io::Write;

#[test]
fn test_tank_file_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[species]]
name = "neon tetra"
quantity = 6

[[species]]
name = "otocinclus"
quantity = 2
"#
    )
    .unwrap();

    let tank = TankFile::from_file(file.path()).unwrap();
    let selection = tank.into_selection();

    assert_eq!(selection.len(), 2);
    assert_eq!(selection[0].name, "neon tetra");
    assert_eq!(selection[0].quantity, 6);
    assert_eq!(selection[1].name, "otocinclus");
}

#[test]
fn test_tank_file_missing_file_is_an_error() {
    assert!(TankFile::from_file("/nonexistent/tank.toml").is_err());
}

#[test]
fn test_tank_file_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "species = not valid").unwrap();

    assert!(TankFile::from_file(file.path()).is_err());
}
