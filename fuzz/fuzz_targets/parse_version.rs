#![no_main]

use libfuzzer_sys::fuzz_target;
use mvn_version::Version;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::parse(data) {
        assert_eq!(version, version.clone());
        let _canonical = version.canonical();
        let _tokens = version.tokens();
    }
});
