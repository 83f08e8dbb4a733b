use crate::decoder::SourceMapDecoder;
use crate::error::DecodeResult;
use simd_json_derive::Deserialize;

#[derive(Debug, Deserialize)]
#[simd_json(rename_all = "camelCase")]
struct RawArtifact<'a> {
    pub contract_name: Option<&'a str>,
    pub source_map: Option<&'a str>,
    pub deployed_source_map: Option<&'a str>,
    pub source: Option<&'a str>,
    pub source_path: Option<&'a str>,
}

/// `Artifact` is the slice of a compiler JSON artifact (truffle/hardhat
/// layout) that source map decoding needs: the maps themselves, the source
/// text and how to label it.
///
/// The buffer is parsed borrowed, so the artifact is only valid as long as
/// the buffer it came from; it is mutable to facilitate in-place replacement
/// of escape characters in the JSON string.
#[derive(Debug, Clone)]
pub struct Artifact<'a> {
    pub contract_name: Option<&'a str>,
    pub source: Option<&'a str>,
    pub source_path: Option<&'a str>,
    source_map: Option<&'a str>,
    deployed_source_map: Option<&'a str>,
}

impl<'a> Artifact<'a> {
    /// Parses an artifact from a JSON buffer slice.
    pub fn from_slice(json: &'a mut [u8]) -> DecodeResult<Self> {
        let raw = RawArtifact::from_slice(json)?;
        Ok(Self {
            contract_name: raw.contract_name,
            source: raw.source,
            source_path: raw.source_path,
            source_map: raw.source_map,
            deployed_source_map: raw.deployed_source_map,
        })
    }

    /// The source map of the creation (constructor) bytecode.
    #[inline]
    pub fn creation_source_map(&self) -> Option<&'a str> {
        self.source_map
    }

    /// The source map of the deployed (runtime) bytecode, the one a debugger
    /// replaying transactions wants.
    #[inline]
    pub fn runtime_source_map(&self) -> Option<&'a str> {
        self.deployed_source_map
    }

    /// Builds a decoder preloaded with this artifact's source at file
    /// index 0, labeled by `sourcePath` or, failing that, the contract name.
    ///
    /// Artifacts of multi-file compilations reference their other files by
    /// index; register those on the returned decoder before decoding.
    pub fn decoder(&self) -> SourceMapDecoder<'a> {
        let mut decoder = SourceMapDecoder::new();
        if let Some(text) = self.source {
            decoder = decoder.with_source_text(0, text);
        }
        if let Some(name) = self.source_path.or(self.contract_name) {
            decoder = decoder.with_file_name(0, name);
        }
        decoder
    }
}

#[cfg(test)]
mod tests {
    use super::Artifact;

    #[test]
    fn test_parse_success() {
        let mut bytes = br#"{
    "contractName": "C",
    "sourceMap": "0:37:0:-",
    "deployedSourceMap": "0:37:0:-;13:22:0:i",
    "source": "contract C { function f() public {} }",
    "sourcePath": "contracts/C.sol"
}"#
        .to_vec();
        let artifact = Artifact::from_slice(bytes.as_mut_slice()).unwrap();
        assert_eq!(artifact.contract_name, Some("C"));
        assert_eq!(artifact.creation_source_map(), Some("0:37:0:-"));
        assert_eq!(artifact.runtime_source_map(), Some("0:37:0:-;13:22:0:i"));
        assert_eq!(artifact.source_path, Some("contracts/C.sol"));
    }

    #[test]
    fn test_parse_error() {
        let mut bytes = br#"{
    "contractName": "C"
    "sourceMap": "0:37:0:-"
}"#
        .to_vec();
        assert!(Artifact::from_slice(bytes.as_mut_slice()).is_err())
    }
}
