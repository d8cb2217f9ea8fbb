//! Legacy names for renamed catalogue entries.
//!
//! Each row maps a deprecated identifier to the canonical identifier of the
//! entry it now resolves to. Rows are checked at compile time, so every
//! target must exist in the catalogue.

/// `(legacy identifier, canonical identifier)`.
pub(crate) const LEGACY: &[(&str, &str)] = &[
  ("Crc4Itu", "Crc4G704"),
  ("Crc5Epc", "Crc5EpcC1G2"),
  ("Crc5Itu", "Crc5G704"),
  ("Crc6Itu", "Crc6G704"),
  ("Crc7", "Crc7Mmc"),
  ("Crc8Itu", "Crc8I4321"),
  ("Crc8Maxim", "Crc8MaximDow"),
  ("CrcDow", "Crc8MaximDow"),
  ("Crc8", "Crc8Smbus"),
  ("Crc8Aes", "Crc8Tech3250"),
  ("Crc8Ebu", "Crc8Tech3250"),
  ("Crc10", "Crc10Atm"),
  ("Crc10I610", "Crc10Atm"),
  ("Crc11", "Crc11Flexray"),
  ("Crc12X", "Crc12Dect"),
  ("Crc123Gpp", "Crc12Umts"),
  ("Crc15", "Crc15Can"),
  ("CrcArc", "Crc16Arc"),
  ("Crc16Lha", "Crc16Arc"),
  ("CrcIbm", "Crc16Arc"),
  ("Crc16Darc", "Crc16Genibus"),
  ("Crc16Epc", "Crc16Genibus"),
  ("CrcEpsC1g2", "Crc16Genibus"),
  ("Crc16ICode", "Crc16Genibus"),
  ("Crc16Autosar", "Crc16Ibm3740"),
  ("Crc16CcittFalse", "Crc16Ibm3740"),
  ("Crc16IsoHdlc", "Crc16IbmSdlc"),
  ("Crc16IsoIec144433B", "Crc16IbmSdlc"),
  ("Crc16X25", "Crc16IbmSdlc"),
  ("CrcB", "Crc16IbmSdlc"),
  ("CrcX25", "Crc16IbmSdlc"),
  ("CrcA", "Crc16IsoIec144433A"),
  ("Crc16Ccitt", "Crc16Kermit"),
  ("Crc16CcittTrue", "Crc16Kermit"),
  ("Crc16V41Lsb", "Crc16Kermit"),
  ("CrcCcitt", "Crc16Kermit"),
  ("CrcKermit", "Crc16Kermit"),
  ("Crc16Maxim", "Crc16MaximDow"),
  ("Crc16Mcrf4xx", "Crc16Mcrf4Xx"),
  ("Crcc16Mcrf4xx", "Crc16Mcrf4Xx"),
  ("CrcModbus", "Crc16Modbus"),
  ("Crc16Iec611582", "Crc16Profibus"),
  ("Crc16AugCcitt", "Crc16SpiFujitsu"),
  ("Crc16Buypass", "Crc16Umts"),
  ("Crc16Verifone", "Crc16Umts"),
  ("Crc16Acorn", "Crc16Xmodem"),
  ("Crc16Lte", "Crc16Xmodem"),
  ("Crc16V41Msb", "Crc16Xmodem"),
  ("CrcXmodem", "Crc16Xmodem"),
  ("CrcZmodem", "Crc16Xmodem"),
  ("Crc16", "Crc16Xmodem"),
  ("Crc24OpenPgp", "Crc24Openpgp"),
  ("Crc24", "Crc24Openpgp"),
  ("Crc32Q", "Crc32Aixm"),
  ("Crc32q", "Crc32Aixm"),
  ("Crc32D", "Crc32Base91D"),
  ("Crc32d", "Crc32Base91D"),
  ("Crc32Aal5", "Crc32Bzip2"),
  ("Crc32DectB", "Crc32Bzip2"),
  ("Crc32B", "Crc32Bzip2"),
  ("CrcCksum", "Crc32Cksum"),
  ("Crc32Posix", "Crc32Cksum"),
  ("Crc32Base91C", "Crc32Iscsi"),
  ("Crc32Castagnoli", "Crc32Iscsi"),
  ("Crc32Interlaken", "Crc32Iscsi"),
  ("Crc32C", "Crc32Iscsi"),
  ("Crc32c", "Crc32Iscsi"),
  ("Crc32Adccp", "Crc32IsoHdlc"),
  ("Crc32V42", "Crc32IsoHdlc"),
  ("Crc32Xz", "Crc32IsoHdlc"),
  ("CrcPkzip", "Crc32IsoHdlc"),
  ("Crc32", "Crc32IsoHdlc"),
  ("CrcJamcrc", "Crc32Jamcrc"),
  ("CrcXfer", "Crc32Xfer"),
  ("Crc64", "Crc64Ecma182"),
  ("CrcGoEcma", "Crc64Xz"),
];
