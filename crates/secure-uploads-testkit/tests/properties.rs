//! Property tests over the full seal/open cycle on disk.

use std::fs;

use proptest::prelude::*;
use secure_uploads::{is_usable, sanitize, ArtifactSet, CipherConfig, ErrorKind, FileCipher};
use secure_uploads_core::ArtifactId;
use secure_uploads_testkit::fixtures::{recipients, TestFixture};
use secure_uploads_testkit::generators::{payload, upload_name, SealParams};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sealed_files_open_under_sanitized_name(name in upload_name(), bytes in payload(4096)) {
        let expected = sanitize(&name);
        prop_assume!(is_usable(&expected));

        let fixture = TestFixture::new().unwrap();
        let data_path = fixture.seal(&name, &bytes).unwrap();
        let recovered = fixture.open(&data_path).unwrap();

        prop_assert_eq!(&recovered, &fixture.out_dir().join(&expected));
        prop_assert_eq!(fs::read(&recovered).unwrap(), bytes);
    }

    #[test]
    fn identifier_is_hash_of_data_file(params: SealParams) {
        let fixture = TestFixture::with_seed(params.secret.to_bytes())
            .unwrap()
            .with_cipher(FileCipher::new(
                CipherConfig::default().with_compression_level(params.compression_level),
            ));

        let data_path = fixture.seal(&params.name, &params.payload).unwrap();
        let set = ArtifactSet::from_data_path(&data_path).unwrap();
        let sealed = fs::read(&data_path).unwrap();

        prop_assert_eq!(set.id(), Some(ArtifactId::derive(&sealed)));
        prop_assert!(set.is_complete());

        let recovered = fixture.open(&data_path).unwrap();
        prop_assert_eq!(fs::read(recovered).unwrap(), params.payload);
    }

    #[test]
    fn other_recipients_cannot_open(bytes in payload(512)) {
        let parties = recipients(2).unwrap();
        let data_path = parties[0].seal("secret.bin", &bytes).unwrap();

        let err = parties[1]
            .cipher
            .open_file(&data_path, parties[1].out_dir(), parties[1].private_key_path())
            .unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Crypto);
        prop_assert!(parties[1].recovered_files().unwrap().is_empty());
    }

    #[test]
    fn sanitize_is_idempotent(name in upload_name()) {
        let once = sanitize(&name);
        prop_assert_eq!(sanitize(&once), once);
    }
}
