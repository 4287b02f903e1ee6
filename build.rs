fn main() {
    #[cfg(target_os = "windows")]
    {
        let res = winres::WindowsResource::new();
        res.compile().unwrap();
    }
}
