#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    /// One directive of every kind, indented and commented like a real file.
    pub const SAMPLE: &str = "
\t# Key flag
\tKEY_FLAG

\t# Value literal
\tVLKEY\tVLVALUE

\t# Env key
\tEKKEY\tENV:ENVCFG_TEST_ENV_KEY_VALUE

\t# Env key with default, variable defined
\tEKDKEY\tENV:ENVCFG_TEST_ENV_DEFINED\t\tekd_default

\t# Env key with default, variable not defined
\tEKUKEY\tENV:ENVCFG_TEST_ENV_UNDEFINED\teku_default
\t";

    pub fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// The environment [`SAMPLE`] expects: two variables set, one left unset.
    pub fn sample_env() -> HashMap<String, String> {
        map_env(&[
            ("ENVCFG_TEST_ENV_KEY_VALUE", "ek_value"),
            ("ENVCFG_TEST_ENV_DEFINED", "ekd_value"),
        ])
    }
}
