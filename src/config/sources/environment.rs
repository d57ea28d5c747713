//! Environment source: READMEGEN_<SECTION>__<KEY>, e.g. READMEGEN_GENERATOR__MODEL.
//! List keys take comma-separated values.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "READMEGEN";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("scan.ignore")
            .with_list_parse_key("scan.snippet_files"),
    )
}
