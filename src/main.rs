use pvgis_nuts::{NutsHierarchy, PvGis};
use std::path::Path;

const COUNTRIES: [&str; 1] = ["DE"];
const YEARS: std::ops::RangeInclusive<i32> = 2016..=2016;
const HIERARCHY_FILE: &str = "data/NUTS2021.xlsx";
const OUT_DIR: &str = "output";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let hierarchy = NutsHierarchy::from_xlsx(HIERARCHY_FILE)?;
    let mut years_missing_data = Vec::new();

    for year in YEARS {
        let pvgis = PvGis::builder().year(year).build()?;
        let report = pvgis
            .download_pv_gis()
            .hierarchy(&hierarchy)
            .countries(&COUNTRIES)
            .out_dir(Path::new(OUT_DIR))
            .call()
            .await?;
        for year in report.years_missing_data {
            if !years_missing_data.contains(&year) {
                years_missing_data.push(year);
            }
        }
    }

    if years_missing_data.is_empty() {
        println!("All areas downloaded.");
    } else {
        println!("Years with missing data: {years_missing_data:?}");
    }
    Ok(())
}
