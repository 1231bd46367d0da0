//! Check command implementation.

use std::path::Path;

use miette::Result;
use vtemplate_util::progress::status_info;

pub fn exec(config_path: &Path) -> Result<()> {
    let config = vtemplate_ops::ops_check::check(config_path)?;
    status_info("Checked", &config_path.display().to_string());

    let dest = &config.content_library_destination;
    println!("Destination for VM {}:", config.location.vm_name);
    println!("  library       = {}", dest.library);
    println!("  name          = {}", dest.name);
    println!("  description   = {}", dest.description);
    println!("  cluster       = {}", or_default(&dest.cluster));
    println!("  folder        = {}", or_default(&dest.folder));
    println!("  host          = {}", or_default(&dest.host));
    println!("  resource_pool = {}", or_default(&dest.resource_pool));

    Ok(())
}

fn or_default(value: &str) -> &str {
    if value.is_empty() {
        "(vSphere default)"
    } else {
        value
    }
}
