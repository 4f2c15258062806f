//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! 저장소 문서(`UserDocument`)와 도메인 엔티티(`User`)는 분리되어 있습니다.
//! 문서는 MongoDB에 저장되는 평평한 형태이고, 엔티티는 자격 증명이 태그 유니온으로
//! 확정된 형태입니다. 변환은 리포지토리 계층에서 이루어집니다.
//!
//! ```text
//! UserDraft ──normalize──▶ User ──▶ UserDocument ──▶ MongoDB
//!                           ▲                           │
//!                           └──── resolve_credentials ◀─┘
//! ```

pub mod users;
