//! CRC RevEng catalogue entries.
//!
//! Ordered by width, then by name. Every entry carries its check value (CRC of
//! ASCII `"123456789"`) and residue; both are verified at compile time against
//! the bitwise reference.

use super::CrcVariant;

define_crc_catalog! {
  (CRC_3_GSM, "Crc3Gsm", "CRC-3/GSM") {
    width: 3, poly: 0x3, init: 0, refin: false, refout: false,
    xorout: 0x7, check: 0x4, residue: 0x2,
  }
  (CRC_3_ROHC, "Crc3Rohc", "CRC-3/ROHC") {
    width: 3, poly: 0x3, init: 0x7, refin: true, refout: true,
    xorout: 0, check: 0x6, residue: 0,
  }
  (CRC_4_G_704, "Crc4G704", "CRC-4/G-704") {
    width: 4, poly: 0x3, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x7, residue: 0,
  }
  (CRC_4_INTERLAKEN, "Crc4Interlaken", "CRC-4/INTERLAKEN") {
    width: 4, poly: 0x3, init: 0xf, refin: false, refout: false,
    xorout: 0xf, check: 0xb, residue: 0x2,
  }
  (CRC_5_EPC_C1G2, "Crc5EpcC1G2", "CRC-5/EPC-C1G2") {
    width: 5, poly: 0x9, init: 0x9, refin: false, refout: false,
    xorout: 0, check: 0, residue: 0,
  }
  (CRC_5_G_704, "Crc5G704", "CRC-5/G-704") {
    width: 5, poly: 0x15, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x7, residue: 0,
  }
  (CRC_5_USB, "Crc5Usb", "CRC-5/USB") {
    width: 5, poly: 0x5, init: 0x1f, refin: true, refout: true,
    xorout: 0x1f, check: 0x19, residue: 0x6,
  }
  (CRC_6_CDMA2000_A, "Crc6Cdma2000A", "CRC-6/CDMA2000-A") {
    width: 6, poly: 0x27, init: 0x3f, refin: false, refout: false,
    xorout: 0, check: 0xd, residue: 0,
  }
  (CRC_6_CDMA2000_B, "Crc6Cdma2000B", "CRC-6/CDMA2000-B") {
    width: 6, poly: 0x7, init: 0x3f, refin: false, refout: false,
    xorout: 0, check: 0x3b, residue: 0,
  }
  (CRC_6_DARC, "Crc6Darc", "CRC-6/DARC") {
    width: 6, poly: 0x19, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x26, residue: 0,
  }
  (CRC_6_G_704, "Crc6G704", "CRC-6/G-704") {
    width: 6, poly: 0x3, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x6, residue: 0,
  }
  (CRC_6_GSM, "Crc6Gsm", "CRC-6/GSM") {
    width: 6, poly: 0x2f, init: 0, refin: false, refout: false,
    xorout: 0x3f, check: 0x13, residue: 0x3a,
  }
  (CRC_7_MMC, "Crc7Mmc", "CRC-7/MMC") {
    width: 7, poly: 0x9, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x75, residue: 0,
  }
  (CRC_7_ROHC, "Crc7Rohc", "CRC-7/ROHC") {
    width: 7, poly: 0x4f, init: 0x7f, refin: true, refout: true,
    xorout: 0, check: 0x53, residue: 0,
  }
  (CRC_7_UMTS, "Crc7Umts", "CRC-7/UMTS") {
    width: 7, poly: 0x45, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x61, residue: 0,
  }
  (CRC_8_AUTOSAR, "Crc8Autosar", "CRC-8/AUTOSAR") {
    width: 8, poly: 0x2f, init: 0xff, refin: false, refout: false,
    xorout: 0xff, check: 0xdf, residue: 0x42,
  }
  (CRC_8_BLUETOOTH, "Crc8Bluetooth", "CRC-8/BLUETOOTH") {
    width: 8, poly: 0xa7, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x26, residue: 0,
  }
  (CRC_8_CDMA2000, "Crc8Cdma2000", "CRC-8/CDMA2000") {
    width: 8, poly: 0x9b, init: 0xff, refin: false, refout: false,
    xorout: 0, check: 0xda, residue: 0,
  }
  (CRC_8_DARC, "Crc8Darc", "CRC-8/DARC") {
    width: 8, poly: 0x39, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x15, residue: 0,
  }
  (CRC_8_DVB_S2, "Crc8DvbS2", "CRC-8/DVB-S2") {
    width: 8, poly: 0xd5, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xbc, residue: 0,
  }
  (CRC_8_GSM_A, "Crc8GsmA", "CRC-8/GSM-A") {
    width: 8, poly: 0x1d, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x37, residue: 0,
  }
  (CRC_8_GSM_B, "Crc8GsmB", "CRC-8/GSM-B") {
    width: 8, poly: 0x49, init: 0, refin: false, refout: false,
    xorout: 0xff, check: 0x94, residue: 0x53,
  }
  (CRC_8_HITAG, "Crc8Hitag", "CRC-8/HITAG") {
    width: 8, poly: 0x1d, init: 0xff, refin: false, refout: false,
    xorout: 0, check: 0xb4, residue: 0,
  }
  (CRC_8_I_432_1, "Crc8I4321", "CRC-8/I-432-1") {
    width: 8, poly: 0x7, init: 0, refin: false, refout: false,
    xorout: 0x55, check: 0xa1, residue: 0xac,
  }
  (CRC_8_I_CODE, "Crc8ICode", "CRC-8/I-CODE") {
    width: 8, poly: 0x1d, init: 0xfd, refin: false, refout: false,
    xorout: 0, check: 0x7e, residue: 0,
  }
  (CRC_8_LTE, "Crc8Lte", "CRC-8/LTE") {
    width: 8, poly: 0x9b, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xea, residue: 0,
  }
  (CRC_8_MAXIM_DOW, "Crc8MaximDow", "CRC-8/MAXIM-DOW") {
    width: 8, poly: 0x31, init: 0, refin: true, refout: true,
    xorout: 0, check: 0xa1, residue: 0,
  }
  (CRC_8_MIFARE_MAD, "Crc8MifareMad", "CRC-8/MIFARE-MAD") {
    width: 8, poly: 0x1d, init: 0xc7, refin: false, refout: false,
    xorout: 0, check: 0x99, residue: 0,
  }
  (CRC_8_NRSC_5, "Crc8Nrsc5", "CRC-8/NRSC-5") {
    width: 8, poly: 0x31, init: 0xff, refin: false, refout: false,
    xorout: 0, check: 0xf7, residue: 0,
  }
  (CRC_8_OPENSAFETY, "Crc8Opensafety", "CRC-8/OPENSAFETY") {
    width: 8, poly: 0x2f, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x3e, residue: 0,
  }
  (CRC_8_ROHC, "Crc8Rohc", "CRC-8/ROHC") {
    width: 8, poly: 0x7, init: 0xff, refin: true, refout: true,
    xorout: 0, check: 0xd0, residue: 0,
  }
  (CRC_8_SAE_J1850, "Crc8SaeJ1850", "CRC-8/SAE-J1850") {
    width: 8, poly: 0x1d, init: 0xff, refin: false, refout: false,
    xorout: 0xff, check: 0x4b, residue: 0xc4,
  }
  (CRC_8_SMBUS, "Crc8Smbus", "CRC-8/SMBUS") {
    width: 8, poly: 0x7, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xf4, residue: 0,
  }
  (CRC_8_TECH_3250, "Crc8Tech3250", "CRC-8/TECH-3250") {
    width: 8, poly: 0x1d, init: 0xff, refin: true, refout: true,
    xorout: 0, check: 0x97, residue: 0,
  }
  (CRC_8_WCDMA, "Crc8Wcdma", "CRC-8/WCDMA") {
    width: 8, poly: 0x9b, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x25, residue: 0,
  }
  (CRC_10_ATM, "Crc10Atm", "CRC-10/ATM") {
    width: 10, poly: 0x233, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x199, residue: 0,
  }
  (CRC_10_CDMA2000, "Crc10Cdma2000", "CRC-10/CDMA2000") {
    width: 10, poly: 0x3d9, init: 0x3ff, refin: false, refout: false,
    xorout: 0, check: 0x233, residue: 0,
  }
  (CRC_10_GSM, "Crc10Gsm", "CRC-10/GSM") {
    width: 10, poly: 0x175, init: 0, refin: false, refout: false,
    xorout: 0x3ff, check: 0x12a, residue: 0xc6,
  }
  (CRC_11_FLEXRAY, "Crc11Flexray", "CRC-11/FLEXRAY") {
    width: 11, poly: 0x385, init: 0x1a, refin: false, refout: false,
    xorout: 0, check: 0x5a3, residue: 0,
  }
  (CRC_11_UMTS, "Crc11Umts", "CRC-11/UMTS") {
    width: 11, poly: 0x307, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x61, residue: 0,
  }
  (CRC_12_CDMA2000, "Crc12Cdma2000", "CRC-12/CDMA2000") {
    width: 12, poly: 0xf13, init: 0xfff, refin: false, refout: false,
    xorout: 0, check: 0xd4d, residue: 0,
  }
  (CRC_12_DECT, "Crc12Dect", "CRC-12/DECT") {
    width: 12, poly: 0x80f, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xf5b, residue: 0,
  }
  (CRC_12_GSM, "Crc12Gsm", "CRC-12/GSM") {
    width: 12, poly: 0xd31, init: 0, refin: false, refout: false,
    xorout: 0xfff, check: 0xb34, residue: 0x178,
  }
  (CRC_12_UMTS, "Crc12Umts", "CRC-12/UMTS") {
    width: 12, poly: 0x80f, init: 0, refin: false, refout: true,
    xorout: 0, check: 0xdaf, residue: 0,
  }
  (CRC_13_BBC, "Crc13Bbc", "CRC-13/BBC") {
    width: 13, poly: 0x1cf5, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x4fa, residue: 0,
  }
  (CRC_14_DARC, "Crc14Darc", "CRC-14/DARC") {
    width: 14, poly: 0x805, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x82d, residue: 0,
  }
  (CRC_14_GSM, "Crc14Gsm", "CRC-14/GSM") {
    width: 14, poly: 0x202d, init: 0, refin: false, refout: false,
    xorout: 0x3fff, check: 0x30ae, residue: 0x31e,
  }
  (CRC_15_CAN, "Crc15Can", "CRC-15/CAN") {
    width: 15, poly: 0x4599, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x59e, residue: 0,
  }
  (CRC_15_MPT1327, "Crc15Mpt1327", "CRC-15/MPT1327") {
    width: 15, poly: 0x6815, init: 0, refin: false, refout: false,
    xorout: 0x1, check: 0x2566, residue: 0x6815,
  }
  (CRC_16_ARC, "Crc16Arc", "CRC-16/ARC") {
    width: 16, poly: 0x8005, init: 0, refin: true, refout: true,
    xorout: 0, check: 0xbb3d, residue: 0,
  }
  (CRC_16_CDMA2000, "Crc16Cdma2000", "CRC-16/CDMA2000") {
    width: 16, poly: 0xc867, init: 0xffff, refin: false, refout: false,
    xorout: 0, check: 0x4c06, residue: 0,
  }
  (CRC_16_CMS, "Crc16Cms", "CRC-16/CMS") {
    width: 16, poly: 0x8005, init: 0xffff, refin: false, refout: false,
    xorout: 0, check: 0xaee7, residue: 0,
  }
  (CRC_16_DDS_110, "Crc16Dds110", "CRC-16/DDS-110") {
    width: 16, poly: 0x8005, init: 0x800d, refin: false, refout: false,
    xorout: 0, check: 0x9ecf, residue: 0,
  }
  (CRC_16_DECT_R, "Crc16DectR", "CRC-16/DECT-R") {
    width: 16, poly: 0x589, init: 0, refin: false, refout: false,
    xorout: 0x1, check: 0x7e, residue: 0x589,
  }
  (CRC_16_DECT_X, "Crc16DectX", "CRC-16/DECT-X") {
    width: 16, poly: 0x589, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x7f, residue: 0,
  }
  (CRC_16_DNP, "Crc16Dnp", "CRC-16/DNP") {
    width: 16, poly: 0x3d65, init: 0, refin: true, refout: true,
    xorout: 0xffff, check: 0xea82, residue: 0x66c5,
  }
  (CRC_16_EN_13757, "Crc16En13757", "CRC-16/EN-13757") {
    width: 16, poly: 0x3d65, init: 0, refin: false, refout: false,
    xorout: 0xffff, check: 0xc2b7, residue: 0xa366,
  }
  (CRC_16_GENIBUS, "Crc16Genibus", "CRC-16/GENIBUS") {
    width: 16, poly: 0x1021, init: 0xffff, refin: false, refout: false,
    xorout: 0xffff, check: 0xd64e, residue: 0x1d0f,
  }
  (CRC_16_GSM, "Crc16Gsm", "CRC-16/GSM") {
    width: 16, poly: 0x1021, init: 0, refin: false, refout: false,
    xorout: 0xffff, check: 0xce3c, residue: 0x1d0f,
  }
  (CRC_16_IBM_3740, "Crc16Ibm3740", "CRC-16/IBM-3740") {
    width: 16, poly: 0x1021, init: 0xffff, refin: false, refout: false,
    xorout: 0, check: 0x29b1, residue: 0,
  }
  (CRC_16_IBM_SDLC, "Crc16IbmSdlc", "CRC-16/IBM-SDLC") {
    width: 16, poly: 0x1021, init: 0xffff, refin: true, refout: true,
    xorout: 0xffff, check: 0x906e, residue: 0xf0b8,
  }
  (CRC_16_ISO_IEC_14443_3_A, "Crc16IsoIec144433A", "CRC-16/ISO-IEC-14443-3-A") {
    width: 16, poly: 0x1021, init: 0xc6c6, refin: true, refout: true,
    xorout: 0, check: 0xbf05, residue: 0,
  }
  (CRC_16_KERMIT, "Crc16Kermit", "CRC-16/KERMIT") {
    width: 16, poly: 0x1021, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x2189, residue: 0,
  }
  (CRC_16_LJ1200, "Crc16Lj1200", "CRC-16/LJ1200") {
    width: 16, poly: 0x6f63, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xbdf4, residue: 0,
  }
  (CRC_16_M17, "Crc16M17", "CRC-16/M17") {
    width: 16, poly: 0x5935, init: 0xffff, refin: false, refout: false,
    xorout: 0, check: 0x772b, residue: 0,
  }
  (CRC_16_MAXIM_DOW, "Crc16MaximDow", "CRC-16/MAXIM-DOW") {
    width: 16, poly: 0x8005, init: 0, refin: true, refout: true,
    xorout: 0xffff, check: 0x44c2, residue: 0xb001,
  }
  (CRC_16_MCRF4XX, "Crc16Mcrf4Xx", "CRC-16/MCRF4XX") {
    width: 16, poly: 0x1021, init: 0xffff, refin: true, refout: true,
    xorout: 0, check: 0x6f91, residue: 0,
  }
  (CRC_16_MODBUS, "Crc16Modbus", "CRC-16/MODBUS") {
    width: 16, poly: 0x8005, init: 0xffff, refin: true, refout: true,
    xorout: 0, check: 0x4b37, residue: 0,
  }
  (CRC_16_NRSC_5, "Crc16Nrsc5", "CRC-16/NRSC-5") {
    width: 16, poly: 0x80b, init: 0xffff, refin: true, refout: true,
    xorout: 0, check: 0xa066, residue: 0,
  }
  (CRC_16_OPENSAFETY_A, "Crc16OpensafetyA", "CRC-16/OPENSAFETY-A") {
    width: 16, poly: 0x5935, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x5d38, residue: 0,
  }
  (CRC_16_OPENSAFETY_B, "Crc16OpensafetyB", "CRC-16/OPENSAFETY-B") {
    width: 16, poly: 0x755b, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x20fe, residue: 0,
  }
  (CRC_16_PROFIBUS, "Crc16Profibus", "CRC-16/PROFIBUS") {
    width: 16, poly: 0x1dcf, init: 0xffff, refin: false, refout: false,
    xorout: 0xffff, check: 0xa819, residue: 0xe394,
  }
  (CRC_16_RIELLO, "Crc16Riello", "CRC-16/RIELLO") {
    width: 16, poly: 0x1021, init: 0xb2aa, refin: true, refout: true,
    xorout: 0, check: 0x63d0, residue: 0,
  }
  (CRC_16_SPI_FUJITSU, "Crc16SpiFujitsu", "CRC-16/SPI-FUJITSU") {
    width: 16, poly: 0x1021, init: 0x1d0f, refin: false, refout: false,
    xorout: 0, check: 0xe5cc, residue: 0,
  }
  (CRC_16_T10_DIF, "Crc16T10Dif", "CRC-16/T10-DIF") {
    width: 16, poly: 0x8bb7, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xd0db, residue: 0,
  }
  (CRC_16_TELEDISK, "Crc16Teledisk", "CRC-16/TELEDISK") {
    width: 16, poly: 0xa097, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xfb3, residue: 0,
  }
  (CRC_16_TMS37157, "Crc16Tms37157", "CRC-16/TMS37157") {
    width: 16, poly: 0x1021, init: 0x89ec, refin: true, refout: true,
    xorout: 0, check: 0x26b1, residue: 0,
  }
  (CRC_16_UMTS, "Crc16Umts", "CRC-16/UMTS") {
    width: 16, poly: 0x8005, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xfee8, residue: 0,
  }
  (CRC_16_USB, "Crc16Usb", "CRC-16/USB") {
    width: 16, poly: 0x8005, init: 0xffff, refin: true, refout: true,
    xorout: 0xffff, check: 0xb4c8, residue: 0xb001,
  }
  (CRC_16_XMODEM, "Crc16Xmodem", "CRC-16/XMODEM") {
    width: 16, poly: 0x1021, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x31c3, residue: 0,
  }
  (CRC_17_CAN_FD, "Crc17CanFd", "CRC-17/CAN-FD") {
    width: 17, poly: 0x1_685b, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x4f03, residue: 0,
  }
  (CRC_21_CAN_FD, "Crc21CanFd", "CRC-21/CAN-FD") {
    width: 21, poly: 0x10_2899, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xe_d841, residue: 0,
  }
  (CRC_24_BLE, "Crc24Ble", "CRC-24/BLE") {
    width: 24, poly: 0x65b, init: 0x55_5555, refin: true, refout: true,
    xorout: 0, check: 0xc2_5a56, residue: 0,
  }
  (CRC_24_FLEXRAY_A, "Crc24FlexrayA", "CRC-24/FLEXRAY-A") {
    width: 24, poly: 0x5d_6dcb, init: 0xfe_dcba, refin: false, refout: false,
    xorout: 0, check: 0x79_79bd, residue: 0,
  }
  (CRC_24_FLEXRAY_B, "Crc24FlexrayB", "CRC-24/FLEXRAY-B") {
    width: 24, poly: 0x5d_6dcb, init: 0xab_cdef, refin: false, refout: false,
    xorout: 0, check: 0x1f_23b8, residue: 0,
  }
  (CRC_24_INTERLAKEN, "Crc24Interlaken", "CRC-24/INTERLAKEN") {
    width: 24, poly: 0x32_8b63, init: 0xff_ffff, refin: false, refout: false,
    xorout: 0xff_ffff, check: 0xb4_f3e6, residue: 0x14_4e63,
  }
  (CRC_24_LTE_A, "Crc24LteA", "CRC-24/LTE-A") {
    width: 24, poly: 0x86_4cfb, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xcd_e703, residue: 0,
  }
  (CRC_24_LTE_B, "Crc24LteB", "CRC-24/LTE-B") {
    width: 24, poly: 0x80_0063, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x23_ef52, residue: 0,
  }
  (CRC_24_OPENPGP, "Crc24Openpgp", "CRC-24/OPENPGP") {
    width: 24, poly: 0x86_4cfb, init: 0xb7_04ce, refin: false, refout: false,
    xorout: 0, check: 0x21_cf02, residue: 0,
  }
  (CRC_24_OS_9, "Crc24Os9", "CRC-24/OS-9") {
    width: 24, poly: 0x80_0063, init: 0xff_ffff, refin: false, refout: false,
    xorout: 0xff_ffff, check: 0x20_0fa5, residue: 0x80_0fe3,
  }
  (CRC_30_CDMA, "Crc30Cdma", "CRC-30/CDMA") {
    width: 30, poly: 0x2030_b9c7, init: 0x3fff_ffff, refin: false, refout: false,
    xorout: 0x3fff_ffff, check: 0x4c3_4abf, residue: 0x34ef_a55a,
  }
  (CRC_31_PHILIPS, "Crc31Philips", "CRC-31/PHILIPS") {
    width: 31, poly: 0x4c1_1db7, init: 0x7fff_ffff, refin: false, refout: false,
    xorout: 0x7fff_ffff, check: 0xce9_e46c, residue: 0x4eaf_26f1,
  }
  (CRC_32_AIXM, "Crc32Aixm", "CRC-32/AIXM") {
    width: 32, poly: 0x8141_41ab, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x3010_bf7f, residue: 0,
  }
  (CRC_32_AUTOSAR, "Crc32Autosar", "CRC-32/AUTOSAR") {
    width: 32, poly: 0xf4ac_fb13, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff, check: 0x1697_d06a, residue: 0x904c_ddbf,
  }
  (CRC_32_BASE91_D, "Crc32Base91D", "CRC-32/BASE91-D") {
    width: 32, poly: 0xa833_982b, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff, check: 0x8731_5576, residue: 0x4527_0551,
  }
  (CRC_32_BZIP2, "Crc32Bzip2", "CRC-32/BZIP2") {
    width: 32, poly: 0x4c1_1db7, init: 0xffff_ffff, refin: false, refout: false,
    xorout: 0xffff_ffff, check: 0xfc89_1918, residue: 0xc704_dd7b,
  }
  (CRC_32_CD_ROM_EDC, "Crc32CdRomEdc", "CRC-32/CD-ROM-EDC") {
    width: 32, poly: 0x8001_801b, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x6ec2_edc4, residue: 0,
  }
  (CRC_32_CKSUM, "Crc32Cksum", "CRC-32/CKSUM") {
    width: 32, poly: 0x4c1_1db7, init: 0, refin: false, refout: false,
    xorout: 0xffff_ffff, check: 0x765e_7680, residue: 0xc704_dd7b,
  }
  (CRC_32_ISCSI, "Crc32Iscsi", "CRC-32/ISCSI") {
    width: 32, poly: 0x1edc_6f41, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff, check: 0xe306_9283, residue: 0xb798_b438,
  }
  (CRC_32_ISO_HDLC, "Crc32IsoHdlc", "CRC-32/ISO-HDLC") {
    width: 32, poly: 0x4c1_1db7, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff, check: 0xcbf4_3926, residue: 0xdebb_20e3,
  }
  (CRC_32_JAMCRC, "Crc32Jamcrc", "CRC-32/JAMCRC") {
    width: 32, poly: 0x4c1_1db7, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0, check: 0x340b_c6d9, residue: 0,
  }
  (CRC_32_MEF, "Crc32Mef", "CRC-32/MEF") {
    width: 32, poly: 0x741b_8cd7, init: 0xffff_ffff, refin: true, refout: true,
    xorout: 0, check: 0xd2c2_2f51, residue: 0,
  }
  (CRC_32_MPEG_2, "Crc32Mpeg2", "CRC-32/MPEG-2") {
    width: 32, poly: 0x4c1_1db7, init: 0xffff_ffff, refin: false, refout: false,
    xorout: 0, check: 0x376_e6e7, residue: 0,
  }
  (CRC_32_XFER, "Crc32Xfer", "CRC-32/XFER") {
    width: 32, poly: 0xaf, init: 0, refin: false, refout: false,
    xorout: 0, check: 0xbd0b_e338, residue: 0,
  }
  (CRC_40_GSM, "Crc40Gsm", "CRC-40/GSM") {
    width: 40, poly: 0x482_0009, init: 0, refin: false, refout: false,
    xorout: 0xff_ffff_ffff, check: 0xd4_164f_c646, residue: 0xc4_ff80_71ff,
  }
  (CRC_64_ECMA_182, "Crc64Ecma182", "CRC-64/ECMA-182") {
    width: 64, poly: 0x42f0_e1eb_a9ea_3693, init: 0, refin: false, refout: false,
    xorout: 0, check: 0x6c40_df5f_0b49_7347, residue: 0,
  }
  (CRC_64_GO_ISO, "Crc64GoIso", "CRC-64/GO-ISO") {
    width: 64, poly: 0x1b, init: 0xffff_ffff_ffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff_ffff_ffff, check: 0xb909_56c7_75a4_1001, residue: 0x5300_0000_0000_0000,
  }
  (CRC_64_MS, "Crc64Ms", "CRC-64/MS") {
    width: 64, poly: 0x259c_84cb_a642_6349, init: 0xffff_ffff_ffff_ffff, refin: true, refout: true,
    xorout: 0, check: 0x75d4_b74f_024e_ceea, residue: 0,
  }
  (CRC_64_NVME, "Crc64Nvme", "CRC-64/NVME") {
    width: 64, poly: 0xad93_d235_94c9_3659, init: 0xffff_ffff_ffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff_ffff_ffff, check: 0xae8b_1486_0a79_9888, residue: 0xf310_303b_2b6f_6e42,
  }
  (CRC_64_REDIS, "Crc64Redis", "CRC-64/REDIS") {
    width: 64, poly: 0xad93_d235_94c9_35a9, init: 0, refin: true, refout: true,
    xorout: 0, check: 0xe9c6_d914_c4b8_d9ca, residue: 0,
  }
  (CRC_64_WE, "Crc64We", "CRC-64/WE") {
    width: 64, poly: 0x42f0_e1eb_a9ea_3693, init: 0xffff_ffff_ffff_ffff, refin: false, refout: false,
    xorout: 0xffff_ffff_ffff_ffff, check: 0x62ec_59e3_f1a4_f00a, residue: 0xfcac_bebd_5931_a992,
  }
  (CRC_64_XZ, "Crc64Xz", "CRC-64/XZ") {
    width: 64, poly: 0x42f0_e1eb_a9ea_3693, init: 0xffff_ffff_ffff_ffff, refin: true, refout: true,
    xorout: 0xffff_ffff_ffff_ffff, check: 0x995d_c9bb_df19_39fa, residue: 0x4995_8c9a_bd7d_353f,
  }
  (CRC_82_DARC, "Crc82Darc", "CRC-82/DARC") {
    width: 82, poly: 0x308c_0111_0114_0144_0411, init: 0, refin: true, refout: true,
    xorout: 0, check: 0x9ea8_3f62_5023_801f_d612, residue: 0,
  }
}
